//! Designer profile types
//!
//! Exactly one profile exists per deployment: a bio plus optional avatar and
//! CV links. The mock store seeds a default; the remote row store is expected
//! to hold a single row.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default bio used when the mock store has never been written
pub const DEFAULT_BIO: &str = "Graphic designer specializing in modern, minimalist design. \
     Passionate about creating beautiful and functional user experiences.";

/// The site owner's profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub cv_url: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// The profile a fresh mock store starts from
    pub fn seeded_default() -> Self {
        Self {
            id: "1".to_string(),
            bio: Some(DEFAULT_BIO.to_string()),
            avatar_url: None,
            cv_url: None,
            updated_at: Utc::now(),
        }
    }

    /// Merge supplied fields into this profile and stamp `updated_at`
    pub fn merged(mut self, changes: ProfileChanges) -> Self {
        if let Some(bio) = changes.bio {
            self.bio = Some(bio);
        }
        if let Some(avatar_url) = changes.avatar_url {
            self.avatar_url = Some(avatar_url);
        }
        if let Some(cv_url) = changes.cv_url {
            self.cv_url = Some(cv_url);
        }
        self.updated_at = Utc::now();
        self
    }
}

/// Partial profile update; `None` fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct ProfileChanges {
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub cv_url: Option<String>,
}
