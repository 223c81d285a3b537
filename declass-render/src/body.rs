//! Seam for externally decompiled member bodies.

use declass_model::{ConstructorDescriptor, MethodDescriptor, TypeDescriptor};

/// Supplier of pre-rendered method and constructor bodies.
///
/// An external decompiler keys bodies by descriptor identity and hands them
/// over already rendered, braces included; the engine splices the text
/// verbatim where a signature would otherwise close with `;` or an empty
/// stub. The engine never triggers decompilation itself.
///
/// Sources must be `Sync`: one renderer may serve concurrent renders.
pub trait BodySource: Sync {
    /// Body for a method declared on `declaring`, if one was decompiled.
    fn method_body(&self, declaring: &TypeDescriptor, method: &MethodDescriptor)
    -> Option<String>;

    /// Body for a constructor declared on `declaring`, if one was
    /// decompiled.
    fn constructor_body(
        &self,
        declaring: &TypeDescriptor,
        constructor: &ConstructorDescriptor,
    ) -> Option<String>;
}
