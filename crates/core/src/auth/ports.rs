//! Port interface for credential backends

use async_trait::async_trait;
use atelier_domain::{Result, Session};

/// Trait for exchanging credentials for a session token
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Exchange email + password for a session
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session>;

    /// Invalidate a session token on the backend
    ///
    /// The mock backend ignores the token and clears its marker instead.
    async fn sign_out(&self, access_token: &str) -> Result<()>;
}
