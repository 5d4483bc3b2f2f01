//! Mock project storage
//!
//! Projects are kept newest-first in a single JSON array. A fresh store is
//! seeded with three example projects the first time the collection is
//! touched, so the public site has something to show before any real work
//! is uploaded.

use std::sync::Arc;

use async_trait::async_trait;
use atelier_core::catalog::ports::{ProjectOrder, ProjectStore};
use atelier_domain::constants::PROJECTS_KEY;
use atelier_domain::{NewProject, Project, ProjectChanges, ProjectUpload, Result};
use chrono::Utc;
use tracing::warn;

use super::{file_to_data_uri, KvStore};
use crate::ids;

/// Fixed starter content written to an untouched store
fn seed_projects() -> Vec<Project> {
    let now = Utc::now();
    let seed = |id: &str, title: &str, description: &str, image_url: &str| Project {
        id: id.to_string(),
        title: title.to_string(),
        description: Some(description.to_string()),
        image_url: image_url.to_string(),
        created_at: now,
        display_order: 0,
    };
    vec![
        seed(
            "1",
            "Brand Identity System",
            "Visual identity and guidelines for an independent coffee roaster",
            "/images/seed-brand.jpg",
        ),
        seed(
            "2",
            "Editorial Illustration",
            "Cover artwork for a quarterly culture magazine",
            "/images/seed-editorial.jpg",
        ),
        seed(
            "3",
            "Mobile App Interface",
            "Interface design for a habit tracking app",
            "/images/seed-app.jpg",
        ),
    ]
}

fn parse_projects(raw: &str) -> Vec<Project> {
    serde_json::from_str(raw).unwrap_or_else(|err| {
        warn!(error = %err, "stored project list is malformed, treating as empty");
        Vec::new()
    })
}

fn serialize_projects(projects: &[Project]) -> Option<String> {
    match serde_json::to_string(projects) {
        Ok(raw) => Some(raw),
        Err(err) => {
            warn!(error = %err, "failed to serialize project list, skipping write");
            None
        }
    }
}

/// Project store backed by one JSON file
pub struct MockProjectStore {
    kv: Arc<KvStore>,
}

impl MockProjectStore {
    pub fn new(kv: Arc<KvStore>) -> Self {
        Self { kv }
    }

    /// Current collection, seeding an untouched store first
    ///
    /// A key that exists but holds an empty array stays empty; only a
    /// missing key is seeded, so deleting every project does not resurrect
    /// the samples.
    async fn load_or_seed(&self) -> Vec<Project> {
        self.kv
            .mutate(PROJECTS_KEY, |current| match current {
                Some(raw) => (None, parse_projects(&raw)),
                None => {
                    let seed = seed_projects();
                    (serialize_projects(&seed), seed)
                }
            })
            .await
            .unwrap_or_default()
    }

    /// Store a record whose image URL is already known
    ///
    /// Stamps the generated id, creation time and display order, prepends
    /// the record and persists. The record is returned even when the store
    /// is unavailable and nothing could be persisted.
    pub async fn create_record(&self, input: NewProject) -> Project {
        let project = Project {
            id: ids::timestamped_id("project"),
            title: input.title,
            description: input.description,
            image_url: input.image_url,
            created_at: Utc::now(),
            display_order: 0,
        };

        let stored = project.clone();
        self.kv
            .mutate(PROJECTS_KEY, move |current| {
                let mut projects = match current {
                    Some(raw) => parse_projects(&raw),
                    None => seed_projects(),
                };
                projects.insert(0, stored);
                (serialize_projects(&projects), ())
            })
            .await;

        project
    }

    /// Generic partial update; `None` when the id is unknown or the store
    /// is unavailable
    pub async fn update(&self, id: &str, changes: ProjectChanges) -> Option<Project> {
        let id = id.to_string();
        self.kv
            .mutate(PROJECTS_KEY, move |current| {
                let mut projects = current.as_deref().map(parse_projects).unwrap_or_default();
                let Some(index) = projects.iter().position(|p| p.id == id) else {
                    return (None, None);
                };
                projects[index].apply(changes);
                let updated = projects[index].clone();
                (serialize_projects(&projects), Some(updated))
            })
            .await
            .flatten()
    }
}

#[async_trait]
impl ProjectStore for MockProjectStore {
    /// Listing ignores the ordering hint: the stored order is already
    /// newest-first because `create` prepends.
    async fn list(&self, _order: ProjectOrder) -> Result<Vec<Project>> {
        if !self.kv.available() {
            return Ok(Vec::new());
        }
        Ok(self.load_or_seed().await)
    }

    async fn create(&self, upload: ProjectUpload) -> Result<Project> {
        let input = NewProject {
            title: upload.title,
            description: upload.description,
            image_url: file_to_data_uri(&upload.image),
        };
        Ok(self.create_record(input).await)
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let id = id.to_string();
        let deleted = self
            .kv
            .mutate(PROJECTS_KEY, move |current| {
                let mut projects = current.as_deref().map(parse_projects).unwrap_or_default();
                projects.retain(|p| p.id != id);
                (serialize_projects(&projects), true)
            })
            .await
            .unwrap_or(false);
        Ok(deleted)
    }
}
