//! Local mock store
//!
//! A localStorage-style backend for running the whole site without the
//! hosted service: projects, the profile and the signed-in marker each live
//! in one JSON file under the data directory. Nothing in here ever surfaces
//! a storage error; a broken data directory degrades to empty reads and
//! dropped writes so the public pages keep rendering.

pub mod auth;
pub mod kv;
pub mod profile;
pub mod projects;

use atelier_domain::FilePayload;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

pub use auth::MockAuthenticator;
pub use kv::KvStore;
pub use profile::MockProfileStore;
pub use projects::MockProjectStore;

/// Inline an uploaded file as a `data:` URI
///
/// The mock store has no object storage, so images are embedded directly in
/// the stored records and render from there.
pub fn file_to_data_uri(payload: &FilePayload) -> String {
    format!("data:{};base64,{}", payload.content_type, BASE64.encode(&payload.bytes))
}
