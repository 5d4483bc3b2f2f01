//! Portfolio project types
//!
//! A project is one piece of portfolio work: a title, an optional blurb and
//! an image URL. The same shape is stored by the mock store and returned by
//! the remote row store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A portfolio project as stored and listed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
    /// Sort weight for the public listing; 0 for newly created projects
    pub display_order: i64,
}

/// Input for creating a project once the image URL is known
///
/// The id, creation timestamp and display order are stamped by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProject {
    pub title: String,
    pub description: Option<String>,
    pub image_url: String,
}

/// Partial update applied by the mock store's generic update operation
///
/// `None` fields are left unchanged. The remote gateway has no project
/// update; this exists only on the local store.
#[derive(Debug, Clone, Default)]
pub struct ProjectChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub display_order: Option<i64>,
}

impl Project {
    /// Apply a partial update in place
    pub fn apply(&mut self, changes: ProjectChanges) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(description) = changes.description {
            self.description = Some(description);
        }
        if let Some(image_url) = changes.image_url {
            self.image_url = image_url;
        }
        if let Some(display_order) = changes.display_order {
            self.display_order = display_order;
        }
    }
}
