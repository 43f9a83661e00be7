use axum::{extract::State, http::StatusCode};
use tracing::info;
use uuid::Uuid;

use service::content::{ContentEntry, ContentInput};

use crate::errors::{AppJson, AppPath, JsonApiError};
use crate::state::ServerState;

#[utoipa::path(get, path = "/content", tag = "content",
    responses((status = 200, description = "All entries ordered by section, key", body = [crate::openapi::ContentEntryDoc]), (status = 503, description = "Storage unavailable", body = crate::openapi::ErrorBodyDoc)))]
pub async fn list_all(State(state): State<ServerState>) -> Result<AppJson<Vec<ContentEntry>>, JsonApiError> {
    let rows = state.content.get_all().await?;
    Ok(AppJson(rows))
}

#[utoipa::path(get, path = "/content/{section}", tag = "content",
    params(("section" = String, Path, description = "Page region, e.g. hero")),
    responses((status = 200, description = "Entries of the section ordered by key", body = [crate::openapi::ContentEntryDoc]), (status = 400, description = "Invalid section", body = crate::openapi::ErrorBodyDoc)))]
pub async fn list_section(
    State(state): State<ServerState>,
    AppPath(section): AppPath<String>,
) -> Result<AppJson<Vec<ContentEntry>>, JsonApiError> {
    let rows = state.content.get_by_section(&section).await?;
    Ok(AppJson(rows))
}

#[utoipa::path(get, path = "/content/{section}/{key}", tag = "content",
    params(("section" = String, Path,), ("key" = String, Path,)),
    responses((status = 200, description = "Entry", body = crate::openapi::ContentEntryDoc), (status = 404, description = "No such entry", body = crate::openapi::ErrorBodyDoc)))]
pub async fn get_entry(
    State(state): State<ServerState>,
    AppPath((section, key)): AppPath<(String, String)>,
) -> Result<AppJson<ContentEntry>, JsonApiError> {
    match state.content.get_by_key(&section, &key).await? {
        Some(entry) => Ok(AppJson(entry)),
        None => Err(JsonApiError::not_found(&format!("{section}/{key}"))),
    }
}

#[utoipa::path(post, path = "/admin/content", tag = "content", request_body = crate::openapi::ContentInputDoc,
    responses((status = 201, description = "Entry created or overwritten", body = crate::openapi::ContentEntryDoc), (status = 400, description = "Invalid input", body = crate::openapi::ErrorBodyDoc)))]
pub async fn upsert(
    State(state): State<ServerState>,
    AppJson(input): AppJson<ContentInput>,
) -> Result<(StatusCode, AppJson<ContentEntry>), JsonApiError> {
    let entry = state.content.upsert(input).await?;
    info!(id = %entry.id, section = %entry.section, key = %entry.key, "content upsert");
    Ok((StatusCode::CREATED, AppJson(entry)))
}

#[utoipa::path(put, path = "/admin/content/{id}", tag = "content", request_body = crate::openapi::ContentInputDoc,
    params(("id" = Uuid, Path,)),
    responses((status = 200, description = "Updated", body = crate::openapi::ContentEntryDoc), (status = 400, description = "Invalid input", body = crate::openapi::ErrorBodyDoc), (status = 404, description = "Unknown id", body = crate::openapi::ErrorBodyDoc)))]
pub async fn update(
    State(state): State<ServerState>,
    AppPath(id): AppPath<Uuid>,
    AppJson(input): AppJson<ContentInput>,
) -> Result<AppJson<ContentEntry>, JsonApiError> {
    let entry = state.content.update_by_id(id, input).await?;
    Ok(AppJson(entry))
}

#[utoipa::path(delete, path = "/admin/content/{id}", tag = "content",
    params(("id" = Uuid, Path,)),
    responses((status = 204, description = "Deleted, or already absent")))]
pub async fn delete(
    State(state): State<ServerState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<StatusCode, JsonApiError> {
    state.content.delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
