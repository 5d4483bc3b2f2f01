//! Application context - dependency injection container

use std::sync::Arc;

use atelier_core::auth::ports::Authenticator;
use atelier_core::catalog::ports::{ProfileStore, ProjectStore};
use atelier_core::{AuthService, CatalogService};
use atelier_domain::{AppConfig, BackendMode};
use atelier_infra::localstore::{KvStore, MockAuthenticator, MockProfileStore, MockProjectStore};
use atelier_infra::supabase::{
    SupabaseAuthenticator, SupabaseClient, SupabaseProfileStore, SupabaseProjectStore,
};
use tracing::info;

/// Application context - holds all services and dependencies
///
/// Assembled once at startup. The backend behind the catalog is fixed for
/// the lifetime of the process; there is no per-request fallback between
/// remote and mock data.
pub struct AppContext {
    pub config: AppConfig,
    pub mode: BackendMode,
    pub catalog: CatalogService,
    pub auth: AuthService,
}

impl AppContext {
    /// Wire services against whichever backend the configuration selects
    ///
    /// The local store is opened in both modes: in mock mode it backs the
    /// whole catalog, in remote mode it still backs the demo-credential
    /// fallback used when the hosted auth endpoint rejects or is down.
    pub async fn new(config: AppConfig) -> Self {
        let mode = BackendMode::select(&config);

        let kv = Arc::new(KvStore::open(config.local.data_dir.as_str()));
        let mock_auth: Arc<dyn Authenticator> = Arc::new(MockAuthenticator::new(kv.clone()));

        let (catalog, auth) = match mode {
            BackendMode::Remote => {
                // select() only picks remote when both values are present
                let url = config.remote.url.as_deref().unwrap_or_default();
                let key = config.remote.key.as_deref().unwrap_or_default();
                let client = Arc::new(SupabaseClient::new(url, key, &config.remote.bucket));

                let projects: Arc<dyn ProjectStore> =
                    Arc::new(SupabaseProjectStore::new(client.clone()));
                let profile: Arc<dyn ProfileStore> =
                    Arc::new(SupabaseProfileStore::new(client.clone()));
                let remote_auth: Arc<dyn Authenticator> =
                    Arc::new(SupabaseAuthenticator::new(client));

                (
                    CatalogService::new(projects, profile),
                    AuthService::new(Some(remote_auth), mock_auth),
                )
            }
            BackendMode::Mock => {
                let projects: Arc<dyn ProjectStore> = Arc::new(MockProjectStore::new(kv.clone()));
                let profile: Arc<dyn ProfileStore> =
                    Arc::new(MockProfileStore::open(kv.clone()).await);

                (CatalogService::new(projects, profile), AuthService::new(None, mock_auth))
            }
        };

        info!(mode = mode.as_str(), "application context ready");
        Self { config, mode, catalog, auth }
    }
}
