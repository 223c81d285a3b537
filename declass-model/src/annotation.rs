//! Annotation instances and attribute values.

use serde::{Deserialize, Serialize};

use crate::types::{ClassRef, TypeRef};

/// A value carried by a field constant, annotation member, or annotation
/// default.
///
/// Comparison is structural (`PartialEq`): arrays compare element-wise,
/// which is exactly the comparison the default-suppression rule needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Boolean(bool),
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Char(char),
    Str(String),
    /// Enum constant reference, rendered as `Type.CONSTANT`.
    Enum { ty: ClassRef, constant: String },
    /// Class literal, rendered as `Type.class`.
    ClassLiteral(TypeRef),
    /// Nested annotation value.
    Annotation(AnnotationInstance),
    Array(Vec<Value>),
}

impl Value {
    /// String value.
    pub fn string(value: impl Into<String>) -> Self {
        Value::Str(value.into())
    }

    /// Enum constant reference.
    pub fn enum_constant(ty: ClassRef, constant: impl Into<String>) -> Self {
        Value::Enum {
            ty,
            constant: constant.into(),
        }
    }

    /// Class literal value.
    pub fn class_literal(ty: TypeRef) -> Self {
        Value::ClassLiteral(ty)
    }
}

/// An attribute value as the acquisition collaborator saw it.
///
/// `Inaccessible` records a read the originating binary form denied;
/// rendering it is a hard failure, never a silent default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MemberValue {
    Value(Value),
    Inaccessible,
}

impl MemberValue {
    /// The value, if it was readable.
    pub fn value(&self) -> Option<&Value> {
        match self {
            MemberValue::Value(value) => Some(value),
            MemberValue::Inaccessible => None,
        }
    }
}

impl From<Value> for MemberValue {
    fn from(value: Value) -> Self {
        MemberValue::Value(value)
    }
}

/// One `name = value` pair of an annotation instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationMember {
    pub name: String,
    pub value: MemberValue,
    /// Declared default of the member on the annotation type, when it has
    /// one. Members equal to their default are suppressed unless the
    /// show-defaults toggle is active.
    #[serde(default)]
    pub default: Option<Value>,
}

/// A single annotation application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationInstance {
    /// The annotation type.
    pub ty: ClassRef,
    /// Members in declaration order.
    #[serde(default)]
    pub members: Vec<AnnotationMember>,
    /// Binary name of the container annotation type when this annotation is
    /// repeatable. A container instance whose `value` member holds an array
    /// of annotations all marked repeatable-by it unrolls into those
    /// elements.
    #[serde(default)]
    pub repeatable_container: Option<String>,
}

impl AnnotationInstance {
    /// Create an annotation instance with no members.
    pub fn new(ty: impl Into<String>) -> Self {
        Self {
            ty: ClassRef::new(ty),
            members: Vec::new(),
            repeatable_container: None,
        }
    }

    /// Add a member with no declared default.
    pub fn member(mut self, name: impl Into<String>, value: Value) -> Self {
        self.members.push(AnnotationMember {
            name: name.into(),
            value: MemberValue::Value(value),
            default: None,
        });
        self
    }

    /// Add a member with a declared default.
    pub fn member_with_default(
        mut self,
        name: impl Into<String>,
        value: Value,
        default: Value,
    ) -> Self {
        self.members.push(AnnotationMember {
            name: name.into(),
            value: MemberValue::Value(value),
            default: Some(default),
        });
        self
    }

    /// Add a member whose value could not be read.
    pub fn inaccessible_member(mut self, name: impl Into<String>) -> Self {
        self.members.push(AnnotationMember {
            name: name.into(),
            value: MemberValue::Inaccessible,
            default: None,
        });
        self
    }

    /// Mark this annotation as repeatable inside the given container type.
    pub fn repeatable_in(mut self, container: impl Into<String>) -> Self {
        self.repeatable_container = Some(container.into());
        self
    }
}
