//! Error types for the lettings group.

use relation_framework::{FrameworkError, ValidationErrors};
use thiserror::Error;

/// Errors that can occur during address and letting operations.
#[derive(Debug, Error)]
pub enum LettingsError {
    /// One or more fields broke their rules; every offending field is listed.
    #[error("Invalid lettings data: {0}")]
    FieldConstraintViolation(ValidationErrors),

    /// The address already has a letting.
    #[error("{kind} already exists for {key}")]
    UniquenessConflict { kind: &'static str, key: String },

    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    /// The lettings actor is gone or its state is inconsistent.
    #[error("Lettings store fault: {0}")]
    Faulted(String),
}

impl From<FrameworkError> for LettingsError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::FieldConstraintViolation(errors) => {
                Self::FieldConstraintViolation(errors)
            }
            FrameworkError::UniquenessConflict { kind, key } => {
                Self::UniquenessConflict { kind, key }
            }
            FrameworkError::NotFound { kind, id } => Self::NotFound { kind, id },
            fault => Self::Faulted(fault.to_string()),
        }
    }
}
