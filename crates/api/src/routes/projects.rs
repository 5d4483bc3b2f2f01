//! Project endpoints
//!
//! Listing is public; create and delete are called from the admin shells.
//! Field validation happens here, before any backend call, so a bad form
//! never touches storage.

use std::sync::Arc;

use atelier_core::catalog::ports::ProjectOrder;
use atelier_domain::{AtelierError, FilePayload, Project, ProjectUpload};
use axum::extract::{Multipart, Query};
use axum::{Extension, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::context::AppContext;
use crate::error::{ApiError, ApiResult};
use crate::routes::forms::{bad_multipart, file_payload, non_empty};

#[derive(Debug, Deserialize)]
pub struct ListParams {
    scope: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteParams {
    id: Option<String>,
}

/// List projects; `?scope=admin` asks for the chronological admin order
pub async fn list(
    Extension(ctx): Extension<Arc<AppContext>>,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<Vec<Project>>> {
    let order = match params.scope.as_deref() {
        Some("admin") => ProjectOrder::Newest,
        _ => ProjectOrder::PublicDisplay,
    };
    Ok(Json(ctx.catalog.list_projects(order).await?))
}

/// Create a project from a multipart submission
pub async fn create(
    Extension(ctx): Extension<Arc<AppContext>>,
    multipart: Multipart,
) -> ApiResult<Json<Value>> {
    let upload = read_project_form(multipart).await?;
    let project = ctx.catalog.create_project(upload).await?;
    Ok(Json(json!({ "success": true, "project": project })))
}

/// Delete a project by the `id` query parameter
pub async fn remove(
    Extension(ctx): Extension<Arc<AppContext>>,
    Query(params): Query<DeleteParams>,
) -> ApiResult<Json<Value>> {
    let id = params
        .id
        .and_then(non_empty)
        .ok_or_else(|| ApiError(AtelierError::InvalidInput("Project ID is required".into())))?;
    let deleted = ctx.catalog.delete_project(&id).await?;
    Ok(Json(json!({ "success": deleted })))
}

async fn read_project_form(mut multipart: Multipart) -> Result<ProjectUpload, ApiError> {
    let mut title = None;
    let mut description = None;
    let mut image: Option<FilePayload> = None;

    while let Some(field) = multipart.next_field().await.map_err(bad_multipart)? {
        match field.name() {
            Some("title") => title = non_empty(field.text().await.map_err(bad_multipart)?),
            Some("description") => {
                description = non_empty(field.text().await.map_err(bad_multipart)?);
            }
            Some("file") => image = Some(file_payload(field).await?),
            _ => {}
        }
    }

    match (image, title, description) {
        (Some(image), Some(title), Some(description)) => {
            Ok(ProjectUpload { title, description: Some(description), image })
        }
        _ => Err(ApiError(AtelierError::InvalidInput("Missing required fields".into()))),
    }
}
