//! Per-render scope: nesting cursor, indentation, and the active imports.

use declass_model::{RenderOptions, TypeArena, TypeDescriptor, TypeId};

use crate::imports::ImportSet;

/// State threaded through every renderer call for one render.
///
/// Each render opens its own context — concurrent renders never share one.
/// The cursor starts at the main (outermost) type and is pushed when a
/// nested type's own member list is entered, popped on leaving it.
#[derive(Debug)]
pub struct RenderContext<'a> {
    arena: &'a TypeArena,
    options: &'a RenderOptions,
    main: TypeId,
    cursor: Vec<TypeId>,
    /// Referenced types accumulated during this render.
    pub imports: ImportSet,
}

impl<'a> RenderContext<'a> {
    /// Open a context for rendering `main`.
    pub fn new(arena: &'a TypeArena, options: &'a RenderOptions, main: TypeId) -> Self {
        let imports = ImportSet::new(arena.get(main).package_name(), options.enable_imports);
        Self {
            arena,
            options,
            main,
            cursor: vec![main],
            imports,
        }
    }

    /// The descriptor arena for this render.
    pub fn arena(&self) -> &'a TypeArena {
        self.arena
    }

    /// The options for this render.
    pub fn options(&self) -> &'a RenderOptions {
        self.options
    }

    /// The outermost type under render.
    pub fn main(&self) -> TypeId {
        self.main
    }

    /// The type whose members are actively being rendered.
    pub fn current(&self) -> TypeId {
        *self.cursor.last().expect("render context cursor is never empty")
    }

    /// Descriptor of the current type.
    pub fn current_type(&self) -> &'a TypeDescriptor {
        self.arena.get(self.current())
    }

    /// Enter a nested type's own member list.
    pub fn push(&mut self, id: TypeId) {
        self.cursor.push(id);
    }

    /// Leave the current nested type.
    pub fn pop(&mut self) {
        if self.cursor.len() > 1 {
            self.cursor.pop();
        }
    }

    /// Enclosing-type hops from the current type up to, not including, the
    /// main type.
    pub fn depth(&self) -> usize {
        self.arena.depth_from(self.current(), self.main)
    }

    /// Indentation string for the given number of levels.
    pub fn indent(&self, levels: usize) -> String {
        self.options.indent.as_str().repeat(levels)
    }

    /// Indentation for the current type's own declaration line.
    pub fn type_indent(&self) -> String {
        self.indent(self.depth())
    }

    /// Indentation for members of the current type, one unit deeper.
    pub fn member_indent(&self) -> String {
        self.indent(self.depth() + 1)
    }

    /// Line separator for this render.
    pub fn sep(&self) -> &'static str {
        self.options.line_separator.as_str()
    }
}
