//! Per-render configuration.
//!
//! Options are read-only for the duration of a render and logically scoped
//! to it; nothing here is process-global.

use serde::{Deserialize, Serialize};

/// Indentation unit for rendered declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// Convert to the string representation for one indent level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Indent::Spaces(2) => "  ",
            Indent::Spaces(4) => "    ",
            Indent::Spaces(8) => "        ",
            // Fallback to 4 whitespaces
            Indent::Spaces(_) => "    ",
            Indent::Tab => "\t",
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Indent::Spaces(4)
    }
}

/// Line terminator for rendered declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineSeparator {
    #[default]
    Lf,
    CrLf,
}

impl LineSeparator {
    /// The terminator characters.
    pub fn as_str(&self) -> &'static str {
        match self {
            LineSeparator::Lf => "\n",
            LineSeparator::CrLf => "\r\n",
        }
    }
}

/// Toggles recognized by the rendering engine.
///
/// Defaults match the behavior users expect from decompiled-source views:
/// annotations, nested types, generics, varargs, field constants, and the
/// import section on; non-standard modifiers and suppressed annotation
/// defaults off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Render annotation blocks at all.
    pub show_annotation_types: bool,
    /// Recurse into nested type declarations.
    pub show_inner_classes: bool,
    /// Emit the non-standard `synthetic` and `implicit` modifier keywords.
    pub show_non_java_modifiers: bool,
    /// Emit annotation members even when equal to their declared default.
    pub show_default_annotation_values: bool,
    /// Emit ` = value` initializers for captured field constants.
    pub display_field_values: bool,
    /// Emit generic parameter lists and type arguments.
    pub show_generic_signatures: bool,
    /// Render a trailing array parameter as `T...` instead of `T[]`.
    pub show_var_args: bool,
    /// Collect and emit the import section; when disabled, every class
    /// reference renders fully qualified.
    pub enable_imports: bool,
    pub indent: Indent,
    pub line_separator: LineSeparator,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_annotation_types: true,
            show_inner_classes: true,
            show_non_java_modifiers: false,
            show_default_annotation_values: false,
            display_field_values: true,
            show_generic_signatures: true,
            show_var_args: true,
            enable_imports: true,
            indent: Indent::default(),
            line_separator: LineSeparator::default(),
        }
    }
}
