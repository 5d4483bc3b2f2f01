//! Mock profile storage
//!
//! A single JSON object under one key. The default profile is written when
//! the store is first opened, so the public page has content before the
//! owner ever edits anything.

use std::sync::Arc;

use async_trait::async_trait;
use atelier_core::catalog::ports::ProfileStore;
use atelier_domain::constants::PROFILE_KEY;
use atelier_domain::{Profile, ProfileChanges, ProfilePatch, Result};
use tracing::warn;

use super::{file_to_data_uri, KvStore};

fn parse_profile(raw: &str) -> Option<Profile> {
    match serde_json::from_str(raw) {
        Ok(profile) => Some(profile),
        Err(err) => {
            warn!(error = %err, "stored profile is malformed, falling back to default");
            None
        }
    }
}

fn serialize_profile(profile: &Profile) -> Option<String> {
    match serde_json::to_string(profile) {
        Ok(raw) => Some(raw),
        Err(err) => {
            warn!(error = %err, "failed to serialize profile, skipping write");
            None
        }
    }
}

/// Profile store backed by one JSON file
pub struct MockProfileStore {
    kv: Arc<KvStore>,
}

impl MockProfileStore {
    /// Open the store and seed the default profile if the key is absent
    pub async fn open(kv: Arc<KvStore>) -> Self {
        let store = Self { kv };
        store.initialize().await;
        store
    }

    /// Write the default profile only when nothing is stored yet
    pub async fn initialize(&self) {
        self.kv
            .mutate(PROFILE_KEY, |current| match current {
                Some(_) => (None, ()),
                None => (serialize_profile(&Profile::seeded_default()), ()),
            })
            .await;
    }

    async fn load(&self) -> Profile {
        match self.kv.read(PROFILE_KEY).await {
            Some(raw) => parse_profile(&raw).unwrap_or_else(Profile::seeded_default),
            None => Profile::seeded_default(),
        }
    }

    /// Merge URL-level changes into the stored profile
    ///
    /// The merged profile is returned even when the store is unavailable and
    /// nothing could be persisted.
    pub async fn update_fields(&self, changes: ProfileChanges) -> Profile {
        let fallback_changes = changes.clone();
        self.kv
            .mutate(PROFILE_KEY, move |current| {
                let current =
                    current.as_deref().and_then(parse_profile).unwrap_or_else(Profile::seeded_default);
                let updated = current.merged(changes);
                (serialize_profile(&updated), updated)
            })
            .await
            .unwrap_or_else(|| Profile::seeded_default().merged(fallback_changes))
    }
}

#[async_trait]
impl ProfileStore for MockProfileStore {
    async fn get(&self) -> Result<Profile> {
        Ok(self.load().await)
    }

    async fn update(&self, patch: ProfilePatch) -> Result<Profile> {
        let changes = ProfileChanges {
            bio: patch.bio,
            avatar_url: patch.avatar.as_ref().map(file_to_data_uri),
            cv_url: patch.cv.as_ref().map(file_to_data_uri),
        };
        Ok(self.update_fields(changes).await)
    }
}
