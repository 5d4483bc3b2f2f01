//! # Atelier Domain
//!
//! Business domain types and models for Atelier.
//!
//! This crate contains:
//! - Portfolio data types (Project, Profile, Session)
//! - Domain error types and Result definitions
//! - Configuration structures and the backend mode predicate
//! - Domain constants (storage keys, demo credentials, cookie names)
//!
//! ## Architecture
//! - No dependencies on other Atelier crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
