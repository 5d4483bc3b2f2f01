//! HTTP error responses
//!
//! Wraps the domain error so handlers can use `?` and still produce the
//! JSON error body the frontend expects: `{"error": "<message>"}` with the
//! message carried verbatim, no variant prefix.

use atelier_domain::AtelierError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

pub type ApiResult<T> = Result<T, ApiError>;

pub struct ApiError(pub AtelierError);

impl From<AtelierError> for ApiError {
    fn from(err: AtelierError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            AtelierError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AtelierError::Auth(_) => StatusCode::UNAUTHORIZED,
            AtelierError::NotFound(_) => StatusCode::NOT_FOUND,
            AtelierError::Network(_) => StatusCode::BAD_GATEWAY,
            AtelierError::Database(_)
            | AtelierError::Storage(_)
            | AtelierError::Config(_)
            | AtelierError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        }

        (status, Json(json!({ "error": self.0.message() }))).into_response()
    }
}
