//! Profile endpoints
//!
//! The profile is a singleton; there is no id in any of these routes. The
//! update form carries the bio text plus optional replacement assets.

use std::sync::Arc;

use atelier_domain::{AtelierError, Profile, ProfilePatch};
use axum::extract::Multipart;
use axum::{Extension, Json};

use crate::context::AppContext;
use crate::error::{ApiError, ApiResult};
use crate::routes::forms::{bad_multipart, file_payload, non_empty};

/// Fetch the site owner's profile
pub async fn fetch(Extension(ctx): Extension<Arc<AppContext>>) -> ApiResult<Json<Profile>> {
    Ok(Json(ctx.catalog.get_profile().await?))
}

/// Update the profile from a multipart submission
pub async fn update(
    Extension(ctx): Extension<Arc<AppContext>>,
    multipart: Multipart,
) -> ApiResult<Json<Profile>> {
    let patch = read_profile_form(multipart).await?;
    Ok(Json(ctx.catalog.update_profile(patch).await?))
}

async fn read_profile_form(mut multipart: Multipart) -> Result<ProfilePatch, ApiError> {
    let mut patch = ProfilePatch::default();

    while let Some(field) = multipart.next_field().await.map_err(bad_multipart)? {
        match field.name() {
            Some("bio") => patch.bio = non_empty(field.text().await.map_err(bad_multipart)?),
            Some("avatar") => patch.avatar = Some(file_payload(field).await?),
            Some("cv") => patch.cv = Some(file_payload(field).await?),
            _ => {}
        }
    }

    if patch.bio.is_none() {
        return Err(ApiError(AtelierError::InvalidInput("Bio is required".into())));
    }
    Ok(patch)
}
