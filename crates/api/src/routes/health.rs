//! Health endpoint

use std::sync::Arc;

use axum::response::IntoResponse;
use axum::{Extension, Json};
use serde_json::json;

use crate::context::AppContext;

/// Liveness probe; also reports which backend the server was wired against
pub async fn health(Extension(ctx): Extension<Arc<AppContext>>) -> impl IntoResponse {
    Json(json!({ "status": "ok", "mode": ctx.mode.as_str() }))
}
