//! Multipart plumbing shared by the project and profile routes

use atelier_domain::{AtelierError, FilePayload};
use axum::extract::multipart::{Field, MultipartError};

use crate::error::ApiError;

/// Buffer one uploaded field into the payload the backends understand
///
/// Browsers always name their parts; the fallbacks only matter for
/// hand-rolled clients.
pub(crate) async fn file_payload(field: Field<'_>) -> Result<FilePayload, ApiError> {
    let file_name = field.file_name().unwrap_or("upload").to_string();
    let content_type = field.content_type().unwrap_or("application/octet-stream").to_string();
    let bytes = field.bytes().await.map_err(bad_multipart)?.to_vec();
    Ok(FilePayload { file_name, content_type, bytes })
}

pub(crate) fn bad_multipart(err: MultipartError) -> ApiError {
    ApiError(AtelierError::InvalidInput(format!("Invalid multipart payload: {err}")))
}

/// Empty strings count as absent; whitespace does not
pub(crate) fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}
