//! Error types for the profiles group.

use relation_framework::{FrameworkError, ValidationErrors};
use thiserror::Error;

/// Errors that can occur during user and profile operations.
#[derive(Debug, Error)]
pub enum ProfilesError {
    #[error("Invalid profiles data: {0}")]
    FieldConstraintViolation(ValidationErrors),

    /// Duplicate username, or a second profile for one user.
    #[error("{kind} already exists for {key}")]
    UniquenessConflict { kind: &'static str, key: String },

    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("Profiles store fault: {0}")]
    Faulted(String),
}

impl From<FrameworkError> for ProfilesError {
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
