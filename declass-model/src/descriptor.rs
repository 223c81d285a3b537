//! Type descriptors and the arena that owns them.
//!
//! Enclosing and nested types reference each other by [`TypeId`] into a
//! shared [`TypeArena`], never by ownership; the enclosing type of a nested
//! descriptor is looked up, not duplicated.

use serde::{Deserialize, Serialize};

use crate::annotation::AnnotationInstance;
use crate::member::{ConstructorDescriptor, FieldDescriptor, MethodDescriptor};
use crate::naming;
use crate::types::{TypeParameter, TypeRef};

/// Handle to a [`TypeDescriptor`] inside a [`TypeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeId(usize);

impl TypeId {
    /// Index into the owning arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// The declaration kind of a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeKind {
    Class,
    Interface,
    Enum,
    Annotation,
}

impl TypeKind {
    /// Declaration keyword including its trailing space.
    pub fn keyword(&self) -> &'static str {
        match self {
            TypeKind::Class => "class ",
            TypeKind::Interface => "interface ",
            TypeKind::Enum => "enum ",
            TypeKind::Annotation => "@interface ",
        }
    }
}

/// Structural description of one declared type.
///
/// Member lists keep declaration order and are never re-sorted; source
/// fidelity depends on the original ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    /// Binary name, e.g. `com.example.Outer$Inner`.
    pub qualified: String,
    pub kind: TypeKind,
    /// Raw JVM access flags.
    pub modifiers: u16,
    #[serde(default)]
    pub type_params: Vec<TypeParameter>,
    #[serde(default)]
    pub annotations: Vec<AnnotationInstance>,
    /// Declared superclass; acquisition omits the implicit ones
    /// (`java.lang.Object`, the enum base class).
    #[serde(default)]
    pub superclass: Option<TypeRef>,
    #[serde(default)]
    pub interfaces: Vec<TypeRef>,
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
    #[serde(default)]
    pub constructors: Vec<ConstructorDescriptor>,
    #[serde(default)]
    pub methods: Vec<MethodDescriptor>,
    /// Nested type handles, in declaration order.
    #[serde(default)]
    pub nested: Vec<TypeId>,
    /// Enclosing type handle; `None` for top-level types.
    #[serde(default)]
    pub enclosing: Option<TypeId>,
}

impl TypeDescriptor {
    /// Create an empty descriptor of the given kind.
    pub fn new(qualified: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            qualified: qualified.into(),
            kind,
            modifiers: 0,
            type_params: Vec::new(),
            annotations: Vec::new(),
            superclass: None,
            interfaces: Vec::new(),
            fields: Vec::new(),
            constructors: Vec::new(),
            methods: Vec::new(),
            nested: Vec::new(),
            enclosing: None,
        }
    }

    /// Set the raw JVM access flags.
    pub fn modifiers(mut self, modifiers: u16) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Add a declared type parameter.
    pub fn type_param(mut self, param: TypeParameter) -> Self {
        self.type_params.push(param);
        self
    }

    /// Add a declared annotation.
    pub fn annotation(mut self, annotation: AnnotationInstance) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Set the declared superclass.
    pub fn superclass(mut self, ty: TypeRef) -> Self {
        self.superclass = Some(ty);
        self
    }

    /// Add an implemented (or extended, for interfaces) interface.
    pub fn interface(mut self, ty: TypeRef) -> Self {
        self.interfaces.push(ty);
        self
    }

    /// Add a declared field.
    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    /// Add a declared constructor.
    pub fn constructor(mut self, constructor: ConstructorDescriptor) -> Self {
        self.constructors.push(constructor);
        self
    }

    /// Add a declared method.
    pub fn method(mut self, method: MethodDescriptor) -> Self {
        self.methods.push(method);
        self
    }

    /// Package portion of the binary name; empty for the default package.
    pub fn package_name(&self) -> &str {
        naming::package_name(&self.qualified)
    }

    /// Innermost simple name.
    pub fn simple_name(&self) -> &str {
        naming::simple_name(&self.qualified)
    }

    /// True for types declared inside another type.
    pub fn is_nested(&self) -> bool {
        self.enclosing.is_some()
    }
}

/// Owner of every [`TypeDescriptor`] produced by one acquisition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TypeArena {
    types: Vec<TypeDescriptor>,
}

impl TypeArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a descriptor and return its handle.
    pub fn alloc(&mut self, descriptor: TypeDescriptor) -> TypeId {
        let id = TypeId(self.types.len());
        self.types.push(descriptor);
        id
    }

    /// Store a descriptor as a nested type of `enclosing`, wiring both
    /// directions of the relation.
    pub fn alloc_nested(&mut self, enclosing: TypeId, descriptor: TypeDescriptor) -> TypeId {
        let id = self.alloc(descriptor);
        self.types[id.0].enclosing = Some(enclosing);
        self.types[enclosing.0].nested.push(id);
        id
    }

    /// Look up a descriptor.
    pub fn get(&self, id: TypeId) -> &TypeDescriptor {
        &self.types[id.0]
    }

    /// Number of descriptors in the arena.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// True when the arena holds no descriptors.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Count the enclosing-type hops from `id` up to, but not including,
    /// `main`. Chains that never reach `main` count to their root.
    pub fn depth_from(&self, id: TypeId, main: TypeId) -> usize {
        let mut depth = 0;
        let mut current = id;
        while current != main {
            match self.get(current).enclosing {
                Some(enclosing) => {
                    depth += 1;
                    current = enclosing;
                }
                None => break,
            }
        }
        depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_keywords() {
        assert_eq!(TypeKind::Class.keyword(), "class ");
        assert_eq!(TypeKind::Annotation.keyword(), "@interface ");
    }

    #[test]
    fn test_nested_relation() {
        let mut arena = TypeArena::new();
        let outer = arena.alloc(TypeDescriptor::new("com.example.Outer", TypeKind::Class));
        let inner = arena.alloc_nested(
            outer,
            TypeDescriptor::new("com.example.Outer$Inner", TypeKind::Class),
        );

        assert_eq!(arena.get(outer).nested, vec![inner]);
        assert_eq!(arena.get(inner).enclosing, Some(outer));
        assert_eq!(arena.get(inner).simple_name(), "Inner");
        assert!(arena.get(inner).is_nested());
    }

    #[test]
    fn test_depth_from() {
        let mut arena = TypeArena::new();
        let outer = arena.alloc(TypeDescriptor::new("a.Outer", TypeKind::Class));
        let inner = arena.alloc_nested(outer, TypeDescriptor::new("a.Outer$Inner", TypeKind::Class));
        let deep = arena.alloc_nested(inner, TypeDescriptor::new("a.Outer$Inner$Deep", TypeKind::Class));

        assert_eq!(arena.depth_from(outer, outer), 0);
        assert_eq!(arena.depth_from(inner, outer), 1);
        assert_eq!(arena.depth_from(deep, outer), 2);
    }
}
