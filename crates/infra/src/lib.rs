//! # Atelier Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - Configuration loading (environment variables and files)
//! - The local mock store (one JSON file per storage key)
//! - The hosted backend gateway (row store, object store, credential auth)
//!
//! ## Architecture
//! - Implements traits defined in `atelier-core`
//! - Depends on `atelier-domain` and `atelier-core`
//! - Contains all "impure" code (file and network I/O)

pub mod config;
pub mod localstore;
pub mod supabase;

mod ids;

// Re-export commonly used items
pub use localstore::{KvStore, MockAuthenticator, MockProfileStore, MockProjectStore};
pub use supabase::{
    SupabaseAuthenticator, SupabaseClient, SupabaseProfileStore, SupabaseProjectStore,
};
