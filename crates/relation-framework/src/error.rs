//! # Framework Errors
//!
//! Common error type returned by every relation group operation. Domain crates map it
//! into their own per-group error enums.

use crate::validation::ValidationErrors;

/// Errors that can occur within the relation framework.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },
    #[error("Field constraint violation: {0}")]
    FieldConstraintViolation(#[from] ValidationErrors),
    #[error("{kind} already exists for {key}")]
    UniquenessConflict { kind: &'static str, key: String },
    #[error("{kind} {id} references a missing parent")]
    DanglingLink { kind: &'static str, id: String },
}

impl FrameworkError {
    pub fn not_found(kind: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            kind,
            id: id.to_string(),
        }
    }

    pub fn conflict(kind: &'static str, key: impl Into<String>) -> Self {
        Self::UniquenessConflict {
            kind,
            key: key.into(),
        }
    }

    /// `true` for failures of the actor plumbing rather than of the request itself.
    pub fn is_fault(&self) -> bool {
        matches!(
            self,
            Self::ActorClosed | Self::ActorDropped | Self::DanglingLink { .. }
        )
    }
}
