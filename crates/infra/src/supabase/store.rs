//! Port adapters over the hosted client
//!
//! Each adapter owns nothing but an `Arc<SupabaseClient>`; all state lives
//! in the remote backend. Write ordering matters: project creation uploads
//! the image before touching the row table, project deletion removes the
//! row before the blob. Blob cleanup after a successful row delete is best
//! effort.

use std::sync::Arc;

use async_trait::async_trait;
use atelier_core::auth::ports::Authenticator;
use atelier_core::catalog::ports::{ProfileStore, ProjectOrder, ProjectStore};
use atelier_domain::constants::{PROFILE_OBJECT_PREFIX, PROJECT_OBJECT_PREFIX};
use atelier_domain::{
    AtelierError, FilePayload, Profile, ProfilePatch, Project, ProjectUpload, Result, Session,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::warn;

use super::client::{OrderDir, SupabaseClient};
use crate::ids;

const PROJECTS_TABLE: &str = "projects";
const PROFILE_TABLE: &str = "profile";

/// Project catalog backed by remote rows and object storage
pub struct SupabaseProjectStore {
    client: Arc<SupabaseClient>,
}

impl SupabaseProjectStore {
    pub fn new(client: Arc<SupabaseClient>) -> Self {
        Self { client }
    }
}

#[derive(Deserialize)]
struct ImageUrlRow {
    image_url: String,
}

/// Bucket-relative path recovered from a public object URL
///
/// Stored URLs end in `{folder}/{object name}`; anything shorter is not
/// ours to delete.
fn object_path_from_url(url: &str) -> Option<String> {
    let mut segments = url.rsplit('/');
    let name = segments.next()?;
    let folder = segments.next()?;
    if name.is_empty() || folder.is_empty() {
        return None;
    }
    Some(format!("{folder}/{name}"))
}

#[async_trait]
impl ProjectStore for SupabaseProjectStore {
    async fn list(&self, order: ProjectOrder) -> Result<Vec<Project>> {
        let chain: &[(&str, OrderDir)] = match order {
            ProjectOrder::PublicDisplay => {
                &[("display_order", OrderDir::Desc), ("created_at", OrderDir::Desc)]
            }
            ProjectOrder::Newest => &[("created_at", OrderDir::Desc)],
        };
        let rows = self.client.select(PROJECTS_TABLE, "*", chain).await?;
        Ok(rows)
    }

    async fn create(&self, upload: ProjectUpload) -> Result<Project> {
        let ext = upload.image.extension().unwrap_or_else(|| "bin".to_string());
        let path = format!("{}/{}", PROJECT_OBJECT_PREFIX, ids::timestamped_object_name(&ext));

        // The row references the blob by URL, so the blob must exist first.
        // If the insert fails afterwards the blob is left behind; admins can
        // reap unreferenced objects from the bucket.
        self.client.upload_object(&path, &upload.image, false).await?;
        let image_url = self.client.public_object_url(&path);

        let row = json!({
            "title": upload.title,
            "description": upload.description,
            "image_url": image_url,
            "display_order": 0,
        });
        let created = self.client.insert(PROJECTS_TABLE, &row).await?;
        Ok(created)
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let row: Option<ImageUrlRow> =
            self.client.select_by_id(PROJECTS_TABLE, "image_url", id).await?;
        let Some(row) = row else {
            return Err(AtelierError::NotFound("Project not found".to_string()));
        };

        self.client.delete_by_id(PROJECTS_TABLE, id).await?;

        if let Some(path) = object_path_from_url(&row.image_url) {
            if let Err(err) = self.client.remove_objects(&[path]).await {
                warn!(project_id = %id, error = %err, "row deleted but image cleanup failed");
            }
        }
        Ok(true)
    }
}

/// Single-row profile backed by remote rows and object storage
pub struct SupabaseProfileStore {
    client: Arc<SupabaseClient>,
}

impl SupabaseProfileStore {
    pub fn new(client: Arc<SupabaseClient>) -> Self {
        Self { client }
    }

    async fn fetch_singleton(&self) -> Result<Profile> {
        let mut rows: Vec<Profile> = self.client.select(PROFILE_TABLE, "*", &[]).await?;
        match rows.len() {
            1 => Ok(rows.remove(0)),
            0 => Err(AtelierError::Config("profile table has no row".to_string())),
            n => Err(AtelierError::Config(format!(
                "profile table has {n} rows, expected exactly one"
            ))),
        }
    }

    /// Upload an asset and return its public URL, or `None` if the upload
    /// failed (logged; the caller omits the field from the patch)
    async fn upload_asset(&self, path: &str, payload: &FilePayload) -> Option<String> {
        match self.client.upload_object(path, payload, true).await {
            Ok(()) => Some(self.client.public_object_url(path)),
            Err(err) => {
                warn!(path = %path, error = %err, "profile asset upload failed, keeping previous URL");
                None
            }
        }
    }
}

#[async_trait]
impl ProfileStore for SupabaseProfileStore {
    async fn get(&self) -> Result<Profile> {
        self.fetch_singleton().await
    }

    async fn update(&self, patch: ProfilePatch) -> Result<Profile> {
        let current = self.fetch_singleton().await?;

        let mut row = serde_json::Map::new();
        row.insert("updated_at".to_string(), json!(Utc::now()));
        if let Some(bio) = patch.bio {
            row.insert("bio".to_string(), Value::String(bio));
        }
        if let Some(avatar) = &patch.avatar {
            let ext = avatar.extension().unwrap_or_else(|| "bin".to_string());
            let path = format!("{}/avatar-{}.{}", PROFILE_OBJECT_PREFIX, ids::unix_millis(), ext);
            if let Some(url) = self.upload_asset(&path, avatar).await {
                row.insert("avatar_url".to_string(), Value::String(url));
            }
        }
        if let Some(cv) = &patch.cv {
            let path = format!("{}/cv-{}.pdf", PROFILE_OBJECT_PREFIX, ids::unix_millis());
            if let Some(url) = self.upload_asset(&path, cv).await {
                row.insert("cv_url".to_string(), Value::String(url));
            }
        }

        let updated = self
            .client
            .update_by_id(PROFILE_TABLE, &current.id, &Value::Object(row))
            .await?;
        Ok(updated)
    }
}

/// Credential auth against the hosted token endpoint
pub struct SupabaseAuthenticator {
    client: Arc<SupabaseClient>,
}

impl SupabaseAuthenticator {
    pub fn new(client: Arc<SupabaseClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Authenticator for SupabaseAuthenticator {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session> {
        let session = self.client.sign_in_with_password(email, password).await?;
        Ok(session)
    }

    async fn sign_out(&self, access_token: &str) -> Result<()> {
        self.client.sign_out(access_token).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{body_json, body_partial_json, method, path, path_regex, query_param};
    use wiremock::{Mock, MockServer, Request, ResponseTemplate};

    use super::*;

    fn project_row(id: &str) -> Value {
        json!({
            "id": id,
            "title": "Brand Identity System",
            "description": "Full identity package",
            "image_url": "https://demo.supabase.co/storage/v1/object/public/portfolio-assets/projects/1700000000000-abc.jpg",
            "created_at": "2024-03-01T10:00:00Z",
            "display_order": 0
        })
    }

    fn profile_row() -> Value {
        json!({
            "id": "1",
            "bio": "Designer based in Oslo.",
            "avatar_url": null,
            "cv_url": null,
            "updated_at": "2024-03-01T10:00:00Z"
        })
    }

    fn jpeg() -> FilePayload {
        FilePayload {
            file_name: "hero.JPG".to_string(),
            content_type: "image/jpeg".to_string(),
            bytes: vec![0xff, 0xd8],
        }
    }

    async fn store(server: &MockServer) -> (SupabaseProjectStore, SupabaseProfileStore) {
        let client = Arc::new(SupabaseClient::new(&server.uri(), "anon", "portfolio-assets"));
        (SupabaseProjectStore::new(client.clone()), SupabaseProfileStore::new(client))
    }

    /// Matches requests whose JSON body does *not* contain the given key
    struct BodyLacksKey(&'static str);

    impl wiremock::Match for BodyLacksKey {
        fn matches(&self, request: &Request) -> bool {
            serde_json::from_slice::<Value>(&request.body)
                .map(|body| body.get(self.0).is_none())
                .unwrap_or(false)
        }
    }

    #[test]
    fn object_path_keeps_the_last_two_segments() {
        assert_eq!(
            object_path_from_url(
                "https://x.co/storage/v1/object/public/portfolio-assets/projects/17-ab.jpg"
            ),
            Some("projects/17-ab.jpg".to_string())
        );
        assert_eq!(object_path_from_url("no-slashes"), None);
        assert_eq!(object_path_from_url("trailing/"), None);
    }

    #[tokio::test]
    async fn public_listing_orders_by_display_order_then_created_at() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/projects"))
            .and(query_param("order", "display_order.desc,created_at.desc"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([project_row("1")])),
            )
            .expect(1)
            .mount(&server)
            .await;

        let (projects, _) = store(&server).await;
        let listed = projects.list(ProjectOrder::PublicDisplay).await.unwrap();

        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].title, "Brand Identity System");
    }

    #[tokio::test]
    async fn admin_listing_orders_by_created_at_only() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/projects"))
            .and(query_param("order", "created_at.desc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let (projects, _) = store(&server).await;
        projects.list(ProjectOrder::Newest).await.unwrap();
    }

    #[tokio::test]
    async fn create_uploads_the_image_then_inserts_the_row() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path_regex(
                r"^/storage/v1/object/portfolio-assets/projects/\d+-[a-z0-9]{9}\.jpg$",
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Key": "k"})))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/rest/v1/projects"))
            .and(body_partial_json(json!({"title": "New Work", "display_order": 0})))
            .respond_with(
                ResponseTemplate::new(201).set_body_json(json!([project_row("9")])),
            )
            .expect(1)
            .mount(&server)
            .await;

        let (projects, _) = store(&server).await;
        let created = projects
            .create(ProjectUpload {
                title: "New Work".to_string(),
                description: Some("desc".to_string()),
                image: jpeg(),
            })
            .await
            .unwrap();

        assert_eq!(created.id, "9");
    }

    #[tokio::test]
    async fn create_aborts_without_touching_rows_when_the_upload_fails() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path_regex(r"^/storage/v1/object/"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({"message": "disk full"})))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/rest/v1/projects"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!([project_row("9")])))
            .expect(0)
            .mount(&server)
            .await;

        let (projects, _) = store(&server).await;
        let err = projects
            .create(ProjectUpload {
                title: "New Work".to_string(),
                description: None,
                image: jpeg(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AtelierError::Storage(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn delete_removes_the_row_then_the_blob() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/projects"))
            .and(query_param("select", "image_url"))
            .and(query_param("id", "eq.7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"image_url": "https://x/storage/v1/object/public/portfolio-assets/projects/a.jpg"}
            ])))
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/rest/v1/projects"))
            .and(query_param("id", "eq.7"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/storage/v1/object/portfolio-assets"))
            .and(body_json(json!({"prefixes": ["projects/a.jpg"]})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let (projects, _) = store(&server).await;
        assert!(projects.delete("7").await.unwrap());
    }

    #[tokio::test]
    async fn delete_still_succeeds_when_blob_cleanup_fails() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/projects"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"image_url": "https://x/storage/v1/object/public/portfolio-assets/projects/a.jpg"}
            ])))
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/rest/v1/projects"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/storage/v1/object/portfolio-assets"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({"message": "busy"})))
            .mount(&server)
            .await;

        let (projects, _) = store(&server).await;
        assert!(projects.delete("7").await.unwrap());
    }

    #[tokio::test]
    async fn delete_of_a_missing_row_is_not_found_and_touches_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/projects"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/rest/v1/projects"))
            .respond_with(ResponseTemplate::new(204))
            .expect(0)
            .mount(&server)
            .await;

        let (projects, _) = store(&server).await;
        let err = projects.delete("ghost").await.unwrap_err();

        match err {
            AtelierError::NotFound(msg) => assert_eq!(msg, "Project not found"),
            other => panic!("expected not found, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn profile_get_requires_exactly_one_row() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/profile"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let (_, profile) = store(&server).await;
        assert!(matches!(profile.get().await.unwrap_err(), AtelierError::Config(_)));
    }

    #[tokio::test]
    async fn profile_get_rejects_duplicate_rows() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/profile"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([profile_row(), profile_row()])),
            )
            .mount(&server)
            .await;

        let (_, profile) = store(&server).await;
        assert!(matches!(profile.get().await.unwrap_err(), AtelierError::Config(_)));
    }

    #[tokio::test]
    async fn profile_update_patches_the_singleton_row_by_id() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/profile"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([profile_row()])))
            .mount(&server)
            .await;
        Mock::given(method("PATCH"))
            .and(path("/rest/v1/profile"))
            .and(query_param("id", "eq.1"))
            .and(body_partial_json(json!({"bio": "Now in Bergen."})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "id": "1",
                "bio": "Now in Bergen.",
                "avatar_url": null,
                "cv_url": null,
                "updated_at": "2024-04-01T00:00:00Z"
            }])))
            .expect(1)
            .mount(&server)
            .await;

        let (_, profile) = store(&server).await;
        let updated = profile
            .update(ProfilePatch { bio: Some("Now in Bergen.".to_string()), ..Default::default() })
            .await
            .unwrap();

        assert_eq!(updated.bio.as_deref(), Some("Now in Bergen."));
    }

    #[tokio::test]
    async fn failed_avatar_upload_drops_only_that_field_from_the_patch() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rest/v1/profile"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([profile_row()])))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path_regex(r"^/storage/v1/object/portfolio-assets/profile/avatar-"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({"message": "quota"})))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("PATCH"))
            .and(path("/rest/v1/profile"))
            .and(BodyLacksKey("avatar_url"))
            .and(body_partial_json(json!({"bio": "Still here."})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([profile_row()])))
            .expect(1)
            .mount(&server)
            .await;

        let (_, profile) = store(&server).await;
        profile
            .update(ProfilePatch {
                bio: Some("Still here.".to_string()),
                avatar: Some(jpeg()),
                cv: None,
            })
            .await
            .unwrap();
    }
}
