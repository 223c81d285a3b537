//! Type reference model.
//!
//! Every shape a type can take in a member signature is a tagged variant,
//! so the resolver in `declass-render` matches exhaustively instead of
//! probing with runtime casts.

use serde::{Deserialize, Serialize};

use crate::naming;

/// Java primitive types, plus `void` for return positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Primitive {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    Char,
    Void,
}

impl Primitive {
    /// Source keyword for this primitive.
    pub fn as_str(&self) -> &'static str {
        match self {
            Primitive::Boolean => "boolean",
            Primitive::Byte => "byte",
            Primitive::Short => "short",
            Primitive::Int => "int",
            Primitive::Long => "long",
            Primitive::Float => "float",
            Primitive::Double => "double",
            Primitive::Char => "char",
            Primitive::Void => "void",
        }
    }
}

/// Reference to a class or interface in binary-name form.
///
/// `dimensions` counts array levels (`String[][]` has 2). The `synthetic`
/// flag marks compiler-generated types whose simple name is meaningless;
/// references without the flag still fall back to name-pattern detection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassRef {
    /// Binary name, e.g. `com.example.Outer$Inner`.
    pub qualified: String,
    /// Array dimensions; 0 for a plain reference.
    #[serde(default)]
    pub dimensions: usize,
    /// Explicitly marked as compiler-generated.
    #[serde(default)]
    pub synthetic: bool,
}

impl ClassRef {
    /// Create a plain (non-array) class reference.
    pub fn new(qualified: impl Into<String>) -> Self {
        Self {
            qualified: qualified.into(),
            dimensions: 0,
            synthetic: false,
        }
    }

    /// Create an array reference with the given number of dimensions.
    pub fn array(qualified: impl Into<String>, dimensions: usize) -> Self {
        Self {
            qualified: qualified.into(),
            dimensions,
            synthetic: false,
        }
    }

    /// Mark the reference as compiler-generated.
    pub fn synthetic(mut self) -> Self {
        self.synthetic = true;
        self
    }

    /// Package portion of the binary name; empty for the default package.
    pub fn package_name(&self) -> &str {
        naming::package_name(&self.qualified)
    }

    /// Innermost simple name (`Inner` for `Outer$Inner`).
    pub fn simple_name(&self) -> &str {
        naming::simple_name(&self.qualified)
    }

    /// Outermost enclosing type of a nested reference, without array
    /// dimensions. This is the identity imports are tracked under.
    pub fn outermost(&self) -> ClassRef {
        ClassRef::new(naming::outermost_name(&self.qualified))
    }

    /// True when this reference names a nested member type.
    pub fn is_nested(&self) -> bool {
        naming::binary_simple_name(&self.qualified).contains('$')
    }

    /// True when this reference is compiler-generated, either by explicit
    /// flag or by name pattern.
    pub fn is_synthetic(&self) -> bool {
        self.synthetic || naming::is_synthetic_name(&self.qualified)
    }

    /// Simple display name with array suffixes (`String[]`).
    pub fn display_simple(&self) -> String {
        let mut name = self.simple_name().to_string();
        for _ in 0..self.dimensions {
            name.push_str("[]");
        }
        name
    }

    /// Fully qualified display name with array suffixes.
    pub fn display_qualified(&self) -> String {
        let mut name = self.qualified.clone();
        for _ in 0..self.dimensions {
            name.push_str("[]");
        }
        name
    }
}

/// A resolvable type reference.
///
/// `Unknown` is the defensive default for references the acquisition side
/// could not classify; it renders as empty text rather than failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TypeRef {
    /// Primitive type or `void`.
    Primitive(Primitive),
    /// Class or interface reference.
    Class(ClassRef),
    /// Declared type variable, referenced by name.
    Variable(String),
    /// Parameterized type, e.g. `Map<K, V>`.
    Parameterized {
        raw: ClassRef,
        args: Vec<TypeArgument>,
    },
    /// Generic array type whose component needs resolution, e.g. `T[]` or
    /// `List<String>[]`. Plain class arrays use [`ClassRef::dimensions`].
    Array(Box<TypeRef>),
    /// Unclassifiable reference; renders as empty text.
    Unknown,
}

impl TypeRef {
    /// Plain class reference from a binary name.
    pub fn class(qualified: impl Into<String>) -> Self {
        TypeRef::Class(ClassRef::new(qualified))
    }

    /// Type variable reference.
    pub fn variable(name: impl Into<String>) -> Self {
        TypeRef::Variable(name.into())
    }

    /// Parameterized reference over a raw type.
    pub fn parameterized(raw: ClassRef, args: Vec<TypeArgument>) -> Self {
        TypeRef::Parameterized { raw, args }
    }

    /// Generic array over a component reference.
    pub fn array_of(component: TypeRef) -> Self {
        TypeRef::Array(Box::new(component))
    }
}

/// Actual argument of a parameterized type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TypeArgument {
    /// Concrete reference argument.
    Reference(TypeRef),
    /// Wildcard argument with optional bounds. The implicit
    /// `java.lang.Object` upper bound is never recorded here.
    Wildcard {
        #[serde(default)]
        upper: Vec<TypeRef>,
        #[serde(default)]
        lower: Vec<TypeRef>,
    },
}

impl TypeArgument {
    /// Unbounded wildcard (`?`).
    pub fn wildcard() -> Self {
        TypeArgument::Wildcard {
            upper: Vec::new(),
            lower: Vec::new(),
        }
    }

    /// Upper-bounded wildcard (`? extends T`).
    pub fn extends(bound: TypeRef) -> Self {
        TypeArgument::Wildcard {
            upper: vec![bound],
            lower: Vec::new(),
        }
    }

    /// Lower-bounded wildcard (`? super T`).
    pub fn super_(bound: TypeRef) -> Self {
        TypeArgument::Wildcard {
            upper: Vec::new(),
            lower: vec![bound],
        }
    }
}

/// Declared type variable of a generic type, method, or constructor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeParameter {
    /// Variable name, e.g. `T`.
    pub name: String,
    /// Declared upper bounds; the implicit `java.lang.Object` bound is
    /// omitted by acquisition and skipped by the renderer if present.
    #[serde(default)]
    pub bounds: Vec<TypeRef>,
}

impl TypeParameter {
    /// Unbounded type variable.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bounds: Vec::new(),
        }
    }

    /// Add an upper bound.
    pub fn bound(mut self, bound: TypeRef) -> Self {
        self.bounds.push(bound);
        self
    }
}
