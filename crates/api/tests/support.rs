use std::sync::Arc;

use atelier_domain::{AppConfig, LocalStoreConfig, RemoteConfig};
use atelier_lib::{router, AppContext};
use axum::Router;
use tempfile::TempDir;

/// Shared context for integration tests that drive the real router.
pub struct TestApp {
    /// Router under test, wired against a fresh backend.
    pub router: Router,
    /// Keep the temporary data directory alive for the lifetime of the app.
    _data_dir: TempDir,
}

/// Create a test app backed by the local mock store.
pub async fn setup_mock_app() -> TestApp {
    let data_dir = TempDir::new().expect("failed to create temporary data directory");
    let config = AppConfig {
        local: LocalStoreConfig { data_dir: data_dir.path().display().to_string() },
        ..AppConfig::default()
    };

    let ctx = Arc::new(AppContext::new(config).await);
    TestApp { router: router(ctx), _data_dir: data_dir }
}

/// Create a test app wired against a stub remote backend.
pub async fn setup_remote_app(server_uri: &str) -> TestApp {
    let data_dir = TempDir::new().expect("failed to create temporary data directory");
    let config = AppConfig {
        remote: RemoteConfig {
            url: Some(server_uri.to_string()),
            key: Some("test-key".to_string()),
            ..RemoteConfig::default()
        },
        local: LocalStoreConfig { data_dir: data_dir.path().display().to_string() },
        ..AppConfig::default()
    };

    let ctx = Arc::new(AppContext::new(config).await);
    TestApp { router: router(ctx), _data_dir: data_dir }
}

/// Hand-rolled multipart body builder for form submissions.
pub struct MultipartForm {
    boundary: &'static str,
    body: Vec<u8>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self { boundary: "atelier-test-boundary", body: Vec::new() }
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.body.extend_from_slice(format!("--{}\r\n", self.boundary).as_bytes());
        self.body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
        );
        self.body.extend_from_slice(value.as_bytes());
        self.body.extend_from_slice(b"\r\n");
        self
    }

    pub fn file(mut self, name: &str, file_name: &str, content_type: &str, bytes: &[u8]) -> Self {
        self.body.extend_from_slice(format!("--{}\r\n", self.boundary).as_bytes());
        self.body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\n")
                .as_bytes(),
        );
        self.body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
        self.body.extend_from_slice(bytes);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    /// Value for the request's `Content-Type` header.
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    /// Close the body with the final boundary.
    pub fn finish(mut self) -> Vec<u8> {
        self.body.extend_from_slice(format!("--{}--\r\n", self.boundary).as_bytes());
        self.body
    }
}
