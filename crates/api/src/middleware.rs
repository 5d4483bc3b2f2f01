//! Session gate for the admin surface
//!
//! Pages under `/admin` require a session cookie to be present. The gate is
//! deliberately shallow: it never validates the cookie value, it only checks
//! that one exists. Every privileged API call re-authenticates against the
//! active backend, so a forged cookie gets you a login-shaped page and
//! nothing else.

use atelier_domain::constants::{ADMIN_PREFIX, LOGIN_PATH, SESSION_COOKIE};
use axum::extract::Request;
use axum::http::header::COOKIE;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use tracing::debug;

/// Redirect admin page requests to `/login` when no session cookie is set
pub async fn require_session(request: Request, next: Next) -> Response {
    if !is_admin_path(request.uri().path()) {
        return next.run(request).await;
    }

    let has_session = request
        .headers()
        .get(COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(session_token)
        .is_some();

    if has_session {
        return next.run(request).await;
    }

    debug!(path = request.uri().path(), "no session cookie, redirecting to login");
    Redirect::temporary(LOGIN_PATH).into_response()
}

/// Extract the session token from a `Cookie` header value
///
/// Returns `None` when the cookie is absent or present with an empty value.
pub fn session_token(header: &str) -> Option<&str> {
    header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE && !value.is_empty()).then_some(value)
    })
}

fn is_admin_path(path: &str) -> bool {
    path == ADMIN_PREFIX || path.strip_prefix(ADMIN_PREFIX).is_some_and(|rest| rest.starts_with('/'))
}
