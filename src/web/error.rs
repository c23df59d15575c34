use crate::lettings_actor::LettingsError;
use crate::profiles_actor::ProfilesError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use std::any::Any;
use thiserror::Error;
use tracing::error;

/// Outcome of a failed resolution.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Not Found")]
    NotFound,
    /// Detail is logged, never rendered.
    #[error("Request faulted: {0}")]
    Faulted(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    status: u16,
    error: &'static str,
}

impl IntoResponse for ResolveError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Faulted(detail) => {
                error!(%detail, "Request faulted");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = ErrorBody {
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or("Error"),
        };
        (status, Json(body)).into_response()
    }
}

impl From<LettingsError> for ResolveError {
    fn from(e: LettingsError) -> Self {
        match e {
            LettingsError::NotFound { .. } => Self::NotFound,
            other => Self::Faulted(other.to_string()),
        }
    }
}

impl From<ProfilesError> for ResolveError {
    fn from(e: ProfilesError) -> Self {
        match e {
            ProfilesError::NotFound { .. } => Self::NotFound,
            other => Self::Faulted(other.to_string()),
        }
    }
}

/// Fallback for paths no route matches.
pub async fn not_found() -> ResolveError {
    ResolveError::NotFound
}

/// Turns a handler panic into the generic 500 response.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic".to_string()
    };
    ResolveError::Faulted(format!("handler panicked: {detail}")).into_response()
}
