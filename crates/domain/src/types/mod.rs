//! Domain types and models

pub mod auth;
pub mod profile;
pub mod project;
pub mod upload;

// Re-export entity types for convenience
pub use auth::Session;
pub use profile::{Profile, ProfileChanges};
pub use project::{NewProject, Project, ProjectChanges};
pub use upload::{FilePayload, ProfilePatch, ProjectUpload};
