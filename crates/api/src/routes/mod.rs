//! HTTP routes and router assembly

pub mod auth;
mod forms;
pub mod health;
pub mod pages;
pub mod profile;
pub mod projects;

use std::sync::Arc;

use axum::middleware::from_fn;
use axum::routing::{get, post};
use axum::{Extension, Router};
use tower_http::trace::TraceLayer;

use crate::context::AppContext;
use crate::middleware::require_session;

/// Build the application router with the shared context attached
pub fn router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .route("/", get(pages::home))
        .route("/login", get(pages::login))
        .route("/admin", get(pages::admin_dashboard))
        .route("/admin/projects", get(pages::admin_projects))
        .route("/admin/profile", get(pages::admin_profile))
        .route("/health", get(health::health))
        .route(
            "/api/projects",
            get(projects::list).post(projects::create).delete(projects::remove),
        )
        .route("/api/profile", get(profile::fetch).put(profile::update))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .layer(from_fn(require_session))
        .layer(Extension(ctx))
        .layer(TraceLayer::new_for_http())
}
