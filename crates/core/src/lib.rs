//! # Atelier Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port/adapter interfaces (traits) the backends implement
//! - Use cases and services
//!
//! ## Architecture Principles
//! - Only depends on `atelier-domain`
//! - No file, HTTP, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod auth;
pub mod catalog;

// Re-export specific items to avoid ambiguity
pub use auth::ports::Authenticator;
pub use auth::AuthService;
pub use catalog::ports::{ProfileStore, ProjectOrder, ProjectStore};
pub use catalog::CatalogService;
