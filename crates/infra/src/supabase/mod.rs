//! Remote backend gateway
//!
//! Talks to a hosted Supabase-compatible stack over three REST surfaces:
//! PostgREST rows under `/rest/v1`, object storage under `/storage/v1` and
//! password-grant auth under `/auth/v1`. The app wires these adapters in
//! when both the remote URL and the access key are configured; otherwise
//! the local mock store takes their place.

pub mod client;
pub mod errors;
pub mod store;

pub use client::{OrderDir, SupabaseClient};
pub use errors::SupabaseError;
pub use store::{SupabaseAuthenticator, SupabaseProfileStore, SupabaseProjectStore};
