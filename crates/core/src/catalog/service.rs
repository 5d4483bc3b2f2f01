//! Catalog service - core business logic

use std::sync::Arc;

use atelier_domain::{Profile, ProfilePatch, Project, ProjectUpload, Result};
use tracing::info;

use super::ports::{ProfileStore, ProjectOrder, ProjectStore};

/// Catalog service over whichever backend was selected at startup
pub struct CatalogService {
    projects: Arc<dyn ProjectStore>,
    profile: Arc<dyn ProfileStore>,
}

impl CatalogService {
    /// Create a new catalog service
    pub fn new(projects: Arc<dyn ProjectStore>, profile: Arc<dyn ProfileStore>) -> Self {
        Self { projects, profile }
    }

    /// List projects in the requested order
    pub async fn list_projects(&self, order: ProjectOrder) -> Result<Vec<Project>> {
        self.projects.list(order).await
    }

    /// Create a project from an uploaded image and its metadata
    pub async fn create_project(&self, upload: ProjectUpload) -> Result<Project> {
        let project = self.projects.create(upload).await?;
        info!(id = %project.id, title = %project.title, "project created");
        Ok(project)
    }

    /// Delete a project by id
    pub async fn delete_project(&self, id: &str) -> Result<bool> {
        let deleted = self.projects.delete(id).await?;
        info!(id = %id, deleted, "project delete processed");
        Ok(deleted)
    }

    /// Fetch the site owner's profile
    pub async fn get_profile(&self) -> Result<Profile> {
        self.profile.get().await
    }

    /// Update the site owner's profile
    pub async fn update_profile(&self, patch: ProfilePatch) -> Result<Profile> {
        let profile = self.profile.update(patch).await?;
        info!(id = %profile.id, "profile updated");
        Ok(profile)
    }
}
