//! # Atelier API
//!
//! HTTP application layer - routes and main entry point.
//!
//! This crate contains:
//! - The axum router and its handlers (public site, admin shells, JSON API)
//! - Application context (dependency injection)
//! - The session gate in front of the admin area
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - Everything HTTP-shaped lives here; handlers delegate to core services

pub mod context;
pub mod error;
pub mod middleware;
pub mod routes;

// Re-export for convenience
pub use context::AppContext;
pub use routes::router;
