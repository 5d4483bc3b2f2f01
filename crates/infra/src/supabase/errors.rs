//! Gateway-specific error types
//!
//! The client reports failures against the surface they happened on (rows,
//! objects, auth, transport); the conversion into the domain error decides
//! how callers see them.

use atelier_domain::AtelierError;
use thiserror::Error;

/// Errors produced by the hosted backend gateway
#[derive(Debug, Error)]
pub enum SupabaseError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Row store error: {0}")]
    Rows(String),

    #[error("Object store error: {0}")]
    Objects(String),

    #[error("Unexpected response: {0}")]
    Response(String),
}

impl SupabaseError {
    /// A request that never produced a response
    pub(crate) fn transport(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

impl From<SupabaseError> for AtelierError {
    fn from(err: SupabaseError) -> Self {
        match err {
            SupabaseError::Network(msg) => Self::Network(msg),
            SupabaseError::Auth(msg) => Self::Auth(msg),
            SupabaseError::Rows(msg) => Self::Database(msg),
            SupabaseError::Objects(msg) => Self::Storage(msg),
            SupabaseError::Response(msg) => Self::Internal(msg),
        }
    }
}
