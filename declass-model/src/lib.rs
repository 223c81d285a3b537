//! Type descriptor model for the declass declaration renderer.
//!
//! This crate provides the structural representation of compiled types that
//! `declass-render` turns back into source text. An acquisition collaborator
//! (runtime introspection or artifact reading) populates a [`TypeArena`]
//! with [`TypeDescriptor`]s before rendering begins; the model itself is
//! pure data with no behavior beyond accessors.
//!
//! # Architecture
//!
//! ```text
//! class file / live JVM → acquisition → declass-model (descriptors) → declass-render
//! ```
//!
//! Everything here derives `serde`, so descriptor graphs can cross process
//! boundaries as plain data.

mod annotation;
mod descriptor;
mod member;
pub mod naming;
mod options;
mod types;

pub use annotation::{AnnotationInstance, AnnotationMember, MemberValue, Value};
pub use descriptor::{TypeArena, TypeDescriptor, TypeId, TypeKind};
pub use member::{
    ConstructorDescriptor, FieldConstant, FieldDescriptor, MethodDescriptor, Parameter,
};
pub use options::{Indent, LineSeparator, RenderOptions};
pub use types::{ClassRef, Primitive, TypeArgument, TypeParameter, TypeRef};
