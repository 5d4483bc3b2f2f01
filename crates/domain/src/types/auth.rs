//! Session types

use serde::{Deserialize, Serialize};

/// An authenticated session: a single opaque bearer token
///
/// The token is whatever the backend issued (`mock-token` from the mock
/// authenticator, a real access token from the remote one). Nothing in this
/// service inspects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
}

impl Session {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self { access_token: access_token.into() }
    }
}
