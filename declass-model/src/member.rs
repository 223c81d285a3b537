//! Declared member model: fields, methods, constructors.

use serde::{Deserialize, Serialize};

use crate::annotation::{AnnotationInstance, MemberValue, Value};
use crate::types::{TypeParameter, TypeRef};

/// Initial value of a field, as acquisition saw it.
///
/// Constants are only ever captured for static fields physically declared
/// on the type under render; `Inaccessible` marks a value the originating
/// binary form refused to hand over.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum FieldConstant {
    #[default]
    None,
    Value(Value),
    Inaccessible,
}

/// A declared field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub ty: TypeRef,
    /// Raw JVM access flags.
    pub modifiers: u16,
    #[serde(default)]
    pub annotations: Vec<AnnotationInstance>,
    #[serde(default)]
    pub constant: FieldConstant,
}

impl FieldDescriptor {
    /// Create a field with no flags, annotations, or constant.
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            modifiers: 0,
            annotations: Vec::new(),
            constant: FieldConstant::None,
        }
    }

    /// Set the raw JVM access flags.
    pub fn modifiers(mut self, modifiers: u16) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Add a declared annotation.
    pub fn annotation(mut self, annotation: AnnotationInstance) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Attach a captured constant value.
    pub fn constant(mut self, value: Value) -> Self {
        self.constant = FieldConstant::Value(value);
        self
    }
}

/// A declared method or constructor parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub ty: TypeRef,
    /// Variable-arity marker; only meaningful on the last parameter, whose
    /// type is the array form (`String[]` for `String...`).
    #[serde(default)]
    pub varargs: bool,
    #[serde(default)]
    pub annotations: Vec<AnnotationInstance>,
}

impl Parameter {
    /// Create a plain parameter.
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            varargs: false,
            annotations: Vec::new(),
        }
    }

    /// Mark the parameter as variable-arity.
    pub fn varargs(mut self) -> Self {
        self.varargs = true;
        self
    }

    /// Add a declared annotation.
    pub fn annotation(mut self, annotation: AnnotationInstance) -> Self {
        self.annotations.push(annotation);
        self
    }
}

/// A declared method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    pub name: String,
    /// Raw JVM access flags.
    pub modifiers: u16,
    #[serde(default)]
    pub annotations: Vec<AnnotationInstance>,
    #[serde(default)]
    pub type_params: Vec<TypeParameter>,
    pub return_type: TypeRef,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub throws: Vec<TypeRef>,
    /// Declared default for members of annotation types, rendered as
    /// ` default <value>` before the terminating `;`.
    #[serde(default)]
    pub default_value: Option<MemberValue>,
    /// Interface default method, rendered with a leading `default `.
    #[serde(default)]
    pub is_default: bool,
}

impl MethodDescriptor {
    /// Create a method with the given name and return type.
    pub fn new(name: impl Into<String>, return_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            modifiers: 0,
            annotations: Vec::new(),
            type_params: Vec::new(),
            return_type,
            parameters: Vec::new(),
            throws: Vec::new(),
            default_value: None,
            is_default: false,
        }
    }

    /// Set the raw JVM access flags.
    pub fn modifiers(mut self, modifiers: u16) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Add a declared annotation.
    pub fn annotation(mut self, annotation: AnnotationInstance) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Add a declared type parameter.
    pub fn type_param(mut self, param: TypeParameter) -> Self {
        self.type_params.push(param);
        self
    }

    /// Add a parameter.
    pub fn parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Add a thrown type.
    pub fn throws(mut self, ty: TypeRef) -> Self {
        self.throws.push(ty);
        self
    }

    /// Set the annotation-member default value.
    pub fn default_value(mut self, value: Value) -> Self {
        self.default_value = Some(MemberValue::Value(value));
        self
    }

    /// Mark as an interface default method.
    pub fn interface_default(mut self) -> Self {
        self.is_default = true;
        self
    }
}

/// A declared constructor. Renders under the declaring type's simple name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstructorDescriptor {
    /// Raw JVM access flags.
    pub modifiers: u16,
    #[serde(default)]
    pub annotations: Vec<AnnotationInstance>,
    #[serde(default)]
    pub type_params: Vec<TypeParameter>,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub throws: Vec<TypeRef>,
}

impl ConstructorDescriptor {
    /// Create a constructor with no flags or parameters.
    pub fn new() -> Self {
        Self {
            modifiers: 0,
            annotations: Vec::new(),
            type_params: Vec::new(),
            parameters: Vec::new(),
            throws: Vec::new(),
        }
    }

    /// Set the raw JVM access flags.
    pub fn modifiers(mut self, modifiers: u16) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Add a declared annotation.
    pub fn annotation(mut self, annotation: AnnotationInstance) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Add a declared type parameter.
    pub fn type_param(mut self, param: TypeParameter) -> Self {
        self.type_params.push(param);
        self
    }

    /// Add a parameter.
    pub fn parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Add a thrown type.
    pub fn throws(mut self, ty: TypeRef) -> Self {
        self.throws.push(ty);
        self
    }
}

impl Default for ConstructorDescriptor {
    fn default() -> Self {
        Self::new()
    }
}
