//! Login and logout endpoints
//!
//! The session cookie is issued on login with a fixed one-hour lifetime and
//! expired on logout no matter what the backend said. Missing JSON fields
//! deserialize as empty strings so bad payloads fail credential checks
//! instead of returning parser errors.

use std::sync::Arc;

use atelier_domain::constants::{SESSION_COOKIE, SESSION_MAX_AGE_SECS};
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use serde::Deserialize;
use serde_json::json;

use crate::context::AppContext;
use crate::error::ApiResult;
use crate::middleware::session_token;

#[derive(Debug, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

/// Exchange credentials for a session cookie
pub async fn login(
    Extension(ctx): Extension<Arc<AppContext>>,
    Json(credentials): Json<Credentials>,
) -> ApiResult<impl IntoResponse> {
    let session = ctx.auth.sign_in(&credentials.email, &credentials.password).await?;

    let cookie = format!(
        "{SESSION_COOKIE}={}; Path=/; Max-Age={SESSION_MAX_AGE_SECS}; SameSite=Lax; HttpOnly",
        session.access_token
    );
    Ok(([(SET_COOKIE, cookie)], Json(json!({ "success": true }))))
}

/// Invalidate the session and expire the cookie
///
/// Backend sign-out is best effort; the cookie is cleared regardless.
pub async fn logout(
    Extension(ctx): Extension<Arc<AppContext>>,
    headers: HeaderMap,
) -> ApiResult<impl IntoResponse> {
    let token = headers.get(COOKIE).and_then(|value| value.to_str().ok()).and_then(session_token);
    ctx.auth.sign_out(token).await?;

    let cookie = format!("{SESSION_COOKIE}=; Path=/; Max-Age=0; SameSite=Lax; HttpOnly");
    Ok(([(SET_COOKIE, cookie)], Json(json!({ "success": true }))))
}
