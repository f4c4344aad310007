//! Public API types

use axum::response::{IntoResponse, Json, Response};
use http::StatusCode;
use serde_json::json;

// Errors

/// API-boundary error carrying the HTTP status that classifies the fault:
/// 4xx for client-caused failures (bad upload, missing credential config),
/// 5xx for server-side and collaborator failures.
pub struct ApiError {
    status: StatusCode,
    source: anyhow::Error,
}

impl ApiError {
    /// Client input fault, e.g. a missing or empty image upload.
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            source: anyhow::anyhow!(msg.into()),
        }
    }

    /// Deployment configuration fault, reported before any external call.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::FORBIDDEN,
            source: anyhow::anyhow!(msg.into()),
        }
    }
}

/// Convert `ApiError` into an Axum compatible response.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Always log the error
        tracing::error!("{}", self.source);

        (self.status, Json(json!({ "error": self.source.to_string() }))).into_response()
    }
}

/// Enables using `?` on functions that return `Result<_,
/// anyhow::Error>` to turn them into `Result<_, ApiError>`. Anything not
/// classified explicitly is a server fault.
impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            source: err.into(),
        }
    }
}

// Re-export public types from each route

pub mod analyze {
    pub use crate::api::routes::analyze::public::*;
}

pub mod schedule {
    pub use crate::api::routes::schedule::public::*;
}
