//! Mock credential backend
//!
//! Accepts exactly one demo email/password pair and records a marker file
//! while signed in. The issued token is a fixed string; the session gate
//! only ever checks cookie presence, so nothing stronger is needed.

use std::sync::Arc;

use async_trait::async_trait;
use atelier_core::auth::ports::Authenticator;
use atelier_domain::constants::{
    AUTH_KEY, AUTH_MARKER, INVALID_CREDENTIALS, MOCK_ACCESS_TOKEN, MOCK_EMAIL, MOCK_PASSWORD,
};
use atelier_domain::{AtelierError, Result, Session};
use tracing::warn;

use super::KvStore;

/// Demo credential backend backed by a marker file
pub struct MockAuthenticator {
    kv: Arc<KvStore>,
}

impl MockAuthenticator {
    pub fn new(kv: Arc<KvStore>) -> Self {
        Self { kv }
    }

    /// Whether the signed-in marker is currently set
    pub async fn is_authenticated(&self) -> bool {
        match self.kv.read(AUTH_KEY).await {
            Some(raw) => match serde_json::from_str::<String>(&raw) {
                Ok(marker) => marker == AUTH_MARKER,
                Err(err) => {
                    warn!(error = %err, "stored auth marker is malformed");
                    false
                }
            },
            None => false,
        }
    }
}

#[async_trait]
impl Authenticator for MockAuthenticator {
    /// Exact match against the demo credentials
    ///
    /// Success does not depend on the marker write landing; an unavailable
    /// store still signs in, it just cannot remember it.
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session> {
        if email == MOCK_EMAIL && password == MOCK_PASSWORD {
            match serde_json::to_string(AUTH_MARKER) {
                Ok(marker) => self.kv.write(AUTH_KEY, marker).await,
                Err(err) => warn!(error = %err, "failed to serialize auth marker"),
            }
            return Ok(Session::new(MOCK_ACCESS_TOKEN));
        }
        Err(AtelierError::Auth(INVALID_CREDENTIALS.to_string()))
    }

    async fn sign_out(&self, _access_token: &str) -> Result<()> {
        self.kv.remove(AUTH_KEY).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn auth(dir: &TempDir) -> MockAuthenticator {
        MockAuthenticator::new(Arc::new(KvStore::open(dir.path())))
    }

    #[tokio::test]
    async fn valid_credentials_issue_the_fixed_token_and_set_the_marker() {
        let dir = TempDir::new().expect("tempdir");
        let auth = auth(&dir);

        let session = auth.sign_in(MOCK_EMAIL, MOCK_PASSWORD).await.unwrap();

        assert_eq!(session.access_token, MOCK_ACCESS_TOKEN);
        assert!(auth.is_authenticated().await);
    }

    #[tokio::test]
    async fn wrong_credentials_fail_with_the_exact_message() {
        let dir = TempDir::new().expect("tempdir");
        let auth = auth(&dir);

        let err = auth.sign_in(MOCK_EMAIL, "wrong").await.unwrap_err();

        assert_eq!(err.message(), INVALID_CREDENTIALS);
        assert!(!auth.is_authenticated().await);
    }

    #[tokio::test]
    async fn sign_out_clears_the_marker() {
        let dir = TempDir::new().expect("tempdir");
        let auth = auth(&dir);
        auth.sign_in(MOCK_EMAIL, MOCK_PASSWORD).await.unwrap();

        auth.sign_out("mock-token").await.unwrap();

        assert!(!auth.is_authenticated().await);
    }

    #[tokio::test]
    async fn unavailable_store_still_signs_in_but_remembers_nothing() {
        let dir = TempDir::new().expect("tempdir");
        let blocker = dir.path().join("occupied");
        std::fs::write(&blocker, "x").expect("write blocker");
        let auth = MockAuthenticator::new(Arc::new(KvStore::open(&blocker)));

        let session = auth.sign_in(MOCK_EMAIL, MOCK_PASSWORD).await.unwrap();

        assert_eq!(session.access_token, MOCK_ACCESS_TOKEN);
        assert!(!auth.is_authenticated().await);
    }
}
