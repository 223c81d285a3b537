//! Declaration rendering engine for the declass project.
//!
//! Turns the structural type descriptors of `declass-model` back into
//! human-readable source text: modifiers, generic signatures, annotations
//! (with repeatable unrolling and default suppression), field constants,
//! nested types, and a resolved import block.
//!
//! # Module Organization
//!
//! - [`renderer`] - Top-level declaration assembly ([`DeclarationRenderer`])
//! - [`context`] - Per-render scope: nesting cursor, indentation, imports
//! - [`generics`] - Generic signature resolution and class display names
//! - [`annotation`] - Annotation instances, unrolling, default suppression
//! - [`value`] - Literal rendering for constants and annotation values
//! - [`modifier`] - Modifier flags and canonical keyword order
//! - [`imports`] - Referenced-type collection and the import block
//! - [`body`] - Seam for externally decompiled member bodies
//!
//! # Example
//!
//! ```
//! use declass_model::{
//!     FieldDescriptor, Primitive, TypeArena, TypeDescriptor, TypeKind, TypeRef, Value,
//! };
//! use declass_render::DeclarationRenderer;
//!
//! let mut arena = TypeArena::new();
//! let id = arena.alloc(
//!     TypeDescriptor::new("com.example.Box", TypeKind::Class)
//!         .modifiers(0x0001)
//!         .field(
//!             FieldDescriptor::new("SIZE", TypeRef::Primitive(Primitive::Int))
//!                 .modifiers(0x0019)
//!                 .constant(Value::Int(10)),
//!         ),
//! );
//!
//! let source = DeclarationRenderer::new(&arena).render(id)?;
//! assert!(source.contains("public static final int SIZE = 10;"));
//! # Ok::<(), declass_render::Error>(())
//! ```

pub mod annotation;
pub mod body;
pub mod context;
pub mod error;
pub mod generics;
pub mod imports;
pub mod modifier;
pub mod renderer;
pub mod value;

pub use body::BodySource;
pub use error::{Error, Result};
pub use imports::ImportSet;
pub use modifier::{Modifiers, render_modifiers};
pub use renderer::DeclarationRenderer;
