//! Port interfaces for catalog storage
//!
//! These traits define the boundaries between core business logic and the
//! two interchangeable backends: the local mock store and the remote
//! row-plus-object store. Handlers never know which one they are talking to.

use async_trait::async_trait;
use atelier_domain::{Profile, ProfilePatch, Project, ProjectUpload, Result};

/// Which ordering a project listing should use
///
/// The public site features curated work first; the admin table is purely
/// chronological. The mock store keeps insertion order (newest first) and
/// ignores this hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectOrder {
    /// `display_order` descending, then `created_at` descending
    PublicDisplay,
    /// `created_at` descending
    Newest,
}

/// Trait for project persistence and retrieval
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// List all projects
    async fn list(&self, order: ProjectOrder) -> Result<Vec<Project>>;

    /// Store a new project from an uploaded image plus its metadata
    async fn create(&self, upload: ProjectUpload) -> Result<Project>;

    /// Delete a project by id; `true` when the backend processed the delete
    async fn delete(&self, id: &str) -> Result<bool>;
}

/// Trait for the singleton profile
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Fetch the profile
    async fn get(&self) -> Result<Profile>;

    /// Merge the supplied fields into the profile and return the result
    async fn update(&self, patch: ProfilePatch) -> Result<Profile>;
}
