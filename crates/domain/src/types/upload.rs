//! Upload payload types
//!
//! Files arrive through multipart requests and are buffered whole; portfolio
//! assets are small. The backends decide what to do with the bytes: the mock
//! store inlines them as data URIs, the remote gateway uploads them to the
//! object store.

use serde::{Deserialize, Serialize};

/// One uploaded file, buffered in memory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilePayload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl FilePayload {
    /// Lowercased extension of the original file name, if any
    pub fn extension(&self) -> Option<String> {
        let (_, ext) = self.file_name.rsplit_once('.')?;
        if ext.is_empty() {
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }
}

/// Everything needed to create a project
#[derive(Debug, Clone)]
pub struct ProjectUpload {
    pub title: String,
    pub description: Option<String>,
    pub image: FilePayload,
}

/// Profile update: new bio text plus optional replacement assets
#[derive(Debug, Clone, Default)]
pub struct ProfilePatch {
    pub bio: Option<String>,
    pub avatar: Option<FilePayload>,
    pub cv: Option<FilePayload>,
}
