//! Login and logout orchestration
//!
//! Sign-in tries the remote backend first and falls back to the demo
//! credentials on any remote failure, so the admin area stays reachable when
//! the hosted backend is down or not configured. Sign-out never blocks on the
//! backend: the caller clears the session cookie no matter what happens here.

use std::sync::Arc;

use atelier_domain::{AtelierError, Result, Session};
use tracing::{info, warn};

use super::ports::Authenticator;

/// Credential service over an optional remote backend plus the mock one
pub struct AuthService {
    remote: Option<Arc<dyn Authenticator>>,
    mock: Arc<dyn Authenticator>,
}

impl AuthService {
    /// Create a new auth service; `remote` is `None` in mock mode
    pub fn new(remote: Option<Arc<dyn Authenticator>>, mock: Arc<dyn Authenticator>) -> Self {
        Self { remote, mock }
    }

    /// Exchange credentials for a session, remote first, mock as fallback
    ///
    /// When both backends reject, the remote backend's own message wins if it
    /// produced one (it is the more specific of the two); transport-level
    /// failures defer to the mock's message.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session> {
        let Some(remote) = &self.remote else {
            return self.mock.sign_in(email, password).await;
        };

        match remote.sign_in(email, password).await {
            Ok(session) => {
                info!("remote sign-in succeeded");
                Ok(session)
            }
            Err(remote_err) => {
                warn!(error = %remote_err, "remote sign-in failed, trying demo credentials");
                match self.mock.sign_in(email, password).await {
                    Ok(session) => Ok(session),
                    Err(mock_err) => match remote_err {
                        AtelierError::Auth(_) => Err(remote_err),
                        _ => Err(mock_err),
                    },
                }
            }
        }
    }

    /// Invalidate the session on whichever backend issued it
    ///
    /// Failures are logged and swallowed; logout must always complete.
    pub async fn sign_out(&self, access_token: Option<&str>) -> Result<()> {
        match &self.remote {
            Some(remote) => {
                if let Some(token) = access_token {
                    if let Err(err) = remote.sign_out(token).await {
                        warn!(error = %err, "remote sign-out failed, session cookie is cleared regardless");
                    }
                }
            }
            None => {
                if let Err(err) = self.mock.sign_out(access_token.unwrap_or_default()).await {
                    warn!(error = %err, "mock sign-out failed");
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;

    struct StaticAuth {
        outcome: std::result::Result<&'static str, AtelierError>,
        sign_ins: AtomicUsize,
        sign_outs: AtomicUsize,
    }

    impl StaticAuth {
        fn succeeding(token: &'static str) -> Self {
            Self { outcome: Ok(token), sign_ins: AtomicUsize::new(0), sign_outs: AtomicUsize::new(0) }
        }

        fn failing(err: AtelierError) -> Self {
            Self { outcome: Err(err), sign_ins: AtomicUsize::new(0), sign_outs: AtomicUsize::new(0) }
        }
    }

    #[async_trait]
    impl Authenticator for StaticAuth {
        async fn sign_in(&self, _email: &str, _password: &str) -> Result<Session> {
            self.sign_ins.fetch_add(1, Ordering::SeqCst);
            match &self.outcome {
                Ok(token) => Ok(Session::new(*token)),
                Err(AtelierError::Auth(msg)) => Err(AtelierError::Auth(msg.clone())),
                Err(AtelierError::Network(msg)) => Err(AtelierError::Network(msg.clone())),
                Err(_) => Err(AtelierError::Internal("stub".into())),
            }
        }

        async fn sign_out(&self, _access_token: &str) -> Result<()> {
            self.sign_outs.fetch_add(1, Ordering::SeqCst);
            match &self.outcome {
                Ok(_) => Ok(()),
                Err(_) => Err(AtelierError::Network("stub offline".into())),
            }
        }
    }

    #[tokio::test]
    async fn remote_success_skips_the_mock() {
        let remote = Arc::new(StaticAuth::succeeding("real-token"));
        let mock = Arc::new(StaticAuth::succeeding("mock-token"));
        let service = AuthService::new(Some(remote.clone()), mock.clone());

        let session = service.sign_in("a@b.c", "pw").await.unwrap();

        assert_eq!(session.access_token, "real-token");
        assert_eq!(mock.sign_ins.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn remote_failure_falls_back_to_mock() {
        let remote = Arc::new(StaticAuth::failing(AtelierError::Auth("bad login".into())));
        let mock = Arc::new(StaticAuth::succeeding("mock-token"));
        let service = AuthService::new(Some(remote), mock);

        let session = service.sign_in("a@b.c", "pw").await.unwrap();

        assert_eq!(session.access_token, "mock-token");
    }

    #[tokio::test]
    async fn both_rejecting_surfaces_the_remote_message() {
        let remote = Arc::new(StaticAuth::failing(AtelierError::Auth("Email not confirmed".into())));
        let mock = Arc::new(StaticAuth::failing(AtelierError::Auth("Invalid credentials".into())));
        let service = AuthService::new(Some(remote), mock);

        let err = service.sign_in("a@b.c", "pw").await.unwrap_err();

        assert_eq!(err.message(), "Email not confirmed");
    }

    #[tokio::test]
    async fn transport_failure_defers_to_the_mock_message() {
        let remote = Arc::new(StaticAuth::failing(AtelierError::Network("connection refused".into())));
        let mock = Arc::new(StaticAuth::failing(AtelierError::Auth("Invalid credentials".into())));
        let service = AuthService::new(Some(remote), mock);

        let err = service.sign_in("a@b.c", "pw").await.unwrap_err();

        assert_eq!(err.message(), "Invalid credentials");
    }

    #[tokio::test]
    async fn no_remote_goes_straight_to_mock() {
        let mock = Arc::new(StaticAuth::succeeding("mock-token"));
        let service = AuthService::new(None, mock.clone());

        let session = service.sign_in("a@b.c", "pw").await.unwrap();

        assert_eq!(session.access_token, "mock-token");
        assert_eq!(mock.sign_ins.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn sign_out_swallows_remote_failures() {
        let remote = Arc::new(StaticAuth::failing(AtelierError::Auth("nope".into())));
        let mock = Arc::new(StaticAuth::succeeding("mock-token"));
        let service = AuthService::new(Some(remote.clone()), mock.clone());

        service.sign_out(Some("token")).await.unwrap();

        assert_eq!(remote.sign_outs.load(Ordering::SeqCst), 1);
        assert_eq!(mock.sign_outs.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn sign_out_without_token_skips_the_remote_call() {
        let remote = Arc::new(StaticAuth::succeeding("real-token"));
        let mock = Arc::new(StaticAuth::succeeding("mock-token"));
        let service = AuthService::new(Some(remote.clone()), mock);

        service.sign_out(None).await.unwrap();

        assert_eq!(remote.sign_outs.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn mock_mode_sign_out_clears_the_marker_backend() {
        let mock = Arc::new(StaticAuth::succeeding("mock-token"));
        let service = AuthService::new(None, mock.clone());

        service.sign_out(None).await.unwrap();

        assert_eq!(mock.sign_outs.load(Ordering::SeqCst), 1);
    }
}
