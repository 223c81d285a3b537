//! Modifier flag rendering.

use bitflags::bitflags;

bitflags! {
    /// JVM access and property flags, including the two non-standard bits
    /// (`SYNTHETIC`, and the mandated/implicit bit) the binary form carries
    /// but the language has no keyword for.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Modifiers: u16 {
        const PUBLIC = 0x0001;
        const PRIVATE = 0x0002;
        const PROTECTED = 0x0004;
        const STATIC = 0x0008;
        const FINAL = 0x0010;
        const SYNCHRONIZED = 0x0020;
        const VOLATILE = 0x0040;
        const TRANSIENT = 0x0080;
        const NATIVE = 0x0100;
        const ABSTRACT = 0x0400;
        const STRICT = 0x0800;
        const SYNTHETIC = 0x1000;
        const IMPLICIT = 0x8000;
    }
}

impl Modifiers {
    /// Interpret raw flags from a descriptor, dropping unknown bits.
    pub fn from_raw(raw: u16) -> Self {
        Modifiers::from_bits_truncate(raw)
    }
}

/// Render a flag set as source keywords in canonical order, each followed
/// by one space; empty when no flag applies.
///
/// Order: `synthetic`/`implicit` (only when `show_non_java` is set), then
/// visibility, `abstract`, `synchronized`, `volatile`, `transient`,
/// `strictfp`, `static`, `native`, `final`. Input bit order never matters.
pub fn render_modifiers(modifiers: Modifiers, show_non_java: bool) -> String {
    let mut keywords = String::new();

    if show_non_java {
        if modifiers.contains(Modifiers::SYNTHETIC) {
            keywords.push_str("synthetic ");
        }
        if modifiers.contains(Modifiers::IMPLICIT) {
            keywords.push_str("implicit ");
        }
    }

    if modifiers.contains(Modifiers::PUBLIC) {
        keywords.push_str("public ");
    }
    if modifiers.contains(Modifiers::PROTECTED) {
        keywords.push_str("protected ");
    }
    if modifiers.contains(Modifiers::PRIVATE) {
        keywords.push_str("private ");
    }

    if modifiers.contains(Modifiers::ABSTRACT) {
        keywords.push_str("abstract ");
    }

    if modifiers.contains(Modifiers::SYNCHRONIZED) {
        keywords.push_str("synchronized ");
    }

    if modifiers.contains(Modifiers::VOLATILE) {
        keywords.push_str("volatile ");
    }
    if modifiers.contains(Modifiers::TRANSIENT) {
        keywords.push_str("transient ");
    }
    if modifiers.contains(Modifiers::STRICT) {
        keywords.push_str("strictfp ");
    }

    if modifiers.contains(Modifiers::STATIC) {
        keywords.push_str("static ");
    }
    if modifiers.contains(Modifiers::NATIVE) {
        keywords.push_str("native ");
    }

    if modifiers.contains(Modifiers::FINAL) {
        keywords.push_str("final ");
    }

    keywords
}
