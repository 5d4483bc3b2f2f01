//! Typed client for the hosted backend
//!
//! Three REST surfaces behind one base URL: PostgREST rows under `/rest/v1`,
//! object storage under `/storage/v1` and password-grant auth under
//! `/auth/v1`. Every operation is a single round trip; failures surface
//! immediately with the backend's own message when it provided one. No
//! retries, no timeouts beyond the transport defaults.

use atelier_domain::{FilePayload, Session};
use reqwest::header::CONTENT_TYPE;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::errors::SupabaseError;

/// Sort direction in an order chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderDir {
    Asc,
    Desc,
}

impl OrderDir {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Which REST surface a response came from, for error attribution
#[derive(Debug, Clone, Copy)]
enum Surface {
    Rows,
    Objects,
}

/// Client for the hosted row store, object store and credential auth
pub struct SupabaseClient {
    base_url: String,
    api_key: String,
    bucket: String,
    http: reqwest::Client,
}

impl SupabaseClient {
    /// Create a client; a trailing `/` on the URL is tolerated
    pub fn new(url: &str, key: &str, bucket: &str) -> Self {
        Self {
            base_url: url.trim_end_matches('/').to_string(),
            api_key: key.to_string(),
            bucket: bucket.to_string(),
            http: reqwest::Client::new(),
        }
    }

    fn keyed(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.header("apikey", &self.api_key).bearer_auth(&self.api_key)
    }

    fn order_chain(order: &[(&str, OrderDir)]) -> String {
        order
            .iter()
            .map(|(column, dir)| format!("{}.{}", column, dir.as_str()))
            .collect::<Vec<_>>()
            .join(",")
    }

    async fn read_json<T: DeserializeOwned>(
        response: Response,
        surface: Surface,
    ) -> Result<T, SupabaseError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::classify(surface, status, &body));
        }
        response
            .json::<T>()
            .await
            .map_err(|e| SupabaseError::Response(format!("failed to parse response: {e}")))
    }

    async fn read_ok(response: Response, surface: Surface) -> Result<(), SupabaseError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::classify(surface, status, &body));
        }
        Ok(())
    }

    fn classify(surface: Surface, status: StatusCode, body: &str) -> SupabaseError {
        let message = extract_message(body, status);
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => SupabaseError::Auth(message),
            _ => match surface {
                Surface::Rows => SupabaseError::Rows(message),
                Surface::Objects => SupabaseError::Objects(message),
            },
        }
    }

    // ------------------------------------------------------------------
    // Rows (PostgREST)
    // ------------------------------------------------------------------

    /// `GET /rest/v1/{table}?select={columns}[&order=...]`
    #[instrument(skip(self))]
    pub async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        columns: &str,
        order: &[(&str, OrderDir)],
    ) -> Result<Vec<T>, SupabaseError> {
        let url = format!("{}/rest/v1/{}", self.base_url, table);
        let mut request = self.keyed(self.http.get(&url)).query(&[("select", columns)]);
        if !order.is_empty() {
            request = request.query(&[("order", Self::order_chain(order))]);
        }
        let response = request.send().await.map_err(SupabaseError::transport)?;
        Self::read_json(response, Surface::Rows).await
    }

    /// Single row by primary key, `None` when no row matches
    #[instrument(skip(self))]
    pub async fn select_by_id<T: DeserializeOwned>(
        &self,
        table: &str,
        columns: &str,
        id: &str,
    ) -> Result<Option<T>, SupabaseError> {
        let url = format!("{}/rest/v1/{}", self.base_url, table);
        let id_filter = format!("eq.{id}");
        let response = self
            .keyed(self.http.get(&url))
            .query(&[("select", columns), ("id", id_filter.as_str())])
            .send()
            .await
            .map_err(SupabaseError::transport)?;
        let rows: Vec<T> = Self::read_json(response, Surface::Rows).await?;
        Ok(rows.into_iter().next())
    }

    /// Insert one row and return the stored representation
    #[instrument(skip(self, row))]
    pub async fn insert<T: Serialize, R: DeserializeOwned>(
        &self,
        table: &str,
        row: &T,
    ) -> Result<R, SupabaseError> {
        let url = format!("{}/rest/v1/{}", self.base_url, table);
        let response = self
            .keyed(self.http.post(&url))
            .header("Prefer", "return=representation")
            .json(row)
            .send()
            .await
            .map_err(SupabaseError::transport)?;
        let mut rows: Vec<R> = Self::read_json(response, Surface::Rows).await?;
        if rows.is_empty() {
            return Err(SupabaseError::Response("insert returned no rows".to_string()));
        }
        Ok(rows.remove(0))
    }

    /// Patch one row by primary key and return the stored representation
    #[instrument(skip(self, patch))]
    pub async fn update_by_id<T: Serialize, R: DeserializeOwned>(
        &self,
        table: &str,
        id: &str,
        patch: &T,
    ) -> Result<R, SupabaseError> {
        let url = format!("{}/rest/v1/{}", self.base_url, table);
        let id_filter = format!("eq.{id}");
        let response = self
            .keyed(self.http.patch(&url))
            .header("Prefer", "return=representation")
            .query(&[("id", id_filter.as_str())])
            .json(patch)
            .send()
            .await
            .map_err(SupabaseError::transport)?;
        let mut rows: Vec<R> = Self::read_json(response, Surface::Rows).await?;
        if rows.is_empty() {
            return Err(SupabaseError::Response("update returned no rows".to_string()));
        }
        Ok(rows.remove(0))
    }

    /// Delete rows matching the primary key
    #[instrument(skip(self))]
    pub async fn delete_by_id(&self, table: &str, id: &str) -> Result<(), SupabaseError> {
        let url = format!("{}/rest/v1/{}", self.base_url, table);
        let id_filter = format!("eq.{id}");
        let response = self
            .keyed(self.http.delete(&url))
            .query(&[("id", id_filter.as_str())])
            .send()
            .await
            .map_err(SupabaseError::transport)?;
        Self::read_ok(response, Surface::Rows).await
    }

    // ------------------------------------------------------------------
    // Objects (storage)
    // ------------------------------------------------------------------

    /// Upload raw bytes to `{bucket}/{path}`
    ///
    /// `upsert` controls the `x-upsert` header: project images are created
    /// fresh, profile assets overwrite in place.
    #[instrument(skip(self, payload), fields(size = payload.bytes.len()))]
    pub async fn upload_object(
        &self,
        path: &str,
        payload: &FilePayload,
        upsert: bool,
    ) -> Result<(), SupabaseError> {
        let url = format!("{}/storage/v1/object/{}/{}", self.base_url, self.bucket, path);
        debug!(url = %url, upsert, "uploading object");
        let response = self
            .keyed(self.http.post(&url))
            .header(CONTENT_TYPE, payload.content_type.as_str())
            .header("x-upsert", if upsert { "true" } else { "false" })
            .body(payload.bytes.clone())
            .send()
            .await
            .map_err(SupabaseError::transport)?;
        Self::read_ok(response, Surface::Objects).await
    }

    /// Public URL for an object; string construction only, no request
    pub fn public_object_url(&self, path: &str) -> String {
        format!("{}/storage/v1/object/public/{}/{}", self.base_url, self.bucket, path)
    }

    /// Remove objects by path
    #[instrument(skip(self))]
    pub async fn remove_objects(&self, paths: &[String]) -> Result<(), SupabaseError> {
        let url = format!("{}/storage/v1/object/{}", self.base_url, self.bucket);
        let response = self
            .keyed(self.http.delete(&url))
            .json(&serde_json::json!({ "prefixes": paths }))
            .send()
            .await
            .map_err(SupabaseError::transport)?;
        Self::read_ok(response, Surface::Objects).await
    }

    // ------------------------------------------------------------------
    // Auth (password grant)
    // ------------------------------------------------------------------

    /// `POST /auth/v1/token?grant_type=password`
    ///
    /// Rejections surface the backend's own message verbatim so the login
    /// form can show it.
    #[instrument(skip(self, password))]
    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, SupabaseError> {
        #[derive(Deserialize)]
        struct TokenResponse {
            access_token: String,
        }

        let url = format!("{}/auth/v1/token", self.base_url);
        let response = self
            .keyed(self.http.post(&url))
            .query(&[("grant_type", "password")])
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(SupabaseError::transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = extract_message(&body, status);
            return Err(if status.is_client_error() {
                SupabaseError::Auth(message)
            } else {
                SupabaseError::Response(format!("auth endpoint returned {status}: {message}"))
            });
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| SupabaseError::Response(format!("failed to parse token response: {e}")))?;
        Ok(Session::new(token.access_token))
    }

    /// `POST /auth/v1/logout` with the user's own token as the bearer
    #[instrument(skip(self, access_token))]
    pub async fn sign_out(&self, access_token: &str) -> Result<(), SupabaseError> {
        let url = format!("{}/auth/v1/logout", self.base_url);
        let response = self
            .http
            .post(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(SupabaseError::transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SupabaseError::Auth(extract_message(&body, status)));
        }
        Ok(())
    }
}

/// Pull the most specific message out of a backend error body
///
/// The three surfaces use different field names; try them in order of
/// specificity and fall back to the bare status.
fn extract_message(body: &str, status: StatusCode) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["error_description", "msg", "message", "error"] {
            if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
                if !text.is_empty() {
                    return text.to_string();
                }
            }
        }
    }
    format!("HTTP {status}")
}
