use miette::Diagnostic;
use thiserror::Error;

/// Result type for rendering operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal rendering failures.
///
/// Both variants are metadata-access failures: a value the originating
/// binary form refused to hand over. Emitting partial or guessed text would
/// silently corrupt output, so the in-flight render aborts and returns
/// nothing. Unknown reference kinds and import-name collisions are handled
/// structurally (empty text, full qualification) and never surface here.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("can't read value of member '{member}' on annotation: {annotation}")]
    #[diagnostic(
        code(declass::metadata_access),
        help("the acquisition collaborator was denied access to this annotation member")
    )]
    AnnotationValue { annotation: String, member: String },

    #[error("can't read constant value of field: {field}")]
    #[diagnostic(
        code(declass::metadata_access),
        help("the acquisition collaborator was denied access to this field constant")
    )]
    FieldConstant { field: String },
}

impl Error {
    /// Annotation-member access failure.
    pub fn annotation_value(annotation: impl Into<String>, member: impl Into<String>) -> Self {
        Error::AnnotationValue {
            annotation: annotation.into(),
            member: member.into(),
        }
    }

    /// Field-constant access failure.
    pub fn field_constant(field: impl Into<String>) -> Self {
        Error::FieldConstant {
            field: field.into(),
        }
    }
}
