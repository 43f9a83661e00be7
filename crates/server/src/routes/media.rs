use axum::{extract::State, http::StatusCode};
use uuid::Uuid;

use models::media::{self, NewMedia, MediaChanges};
use service::db::media_service;

use crate::errors::{AppJson, AppPath, JsonApiError};
use crate::state::ServerState;

/// Media has no visibility flag; the public listing and the admin one match.
pub async fn list_all(State(state): State<ServerState>) -> Result<AppJson<Vec<media::Model>>, JsonApiError> {
    Ok(AppJson(media_service::list_all(state.db()?).await?))
}

pub async fn get(
    State(state): State<ServerState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<AppJson<media::Model>, JsonApiError> {
    media_service::get(state.db()?, id)
        .await?
        .map(AppJson)
        .ok_or_else(|| JsonApiError::not_found("media"))
}

pub async fn create(
    State(state): State<ServerState>,
    AppJson(input): AppJson<NewMedia>,
) -> Result<(StatusCode, AppJson<media::Model>), JsonApiError> {
    let created = media_service::create(state.db()?, input).await?;
    Ok((StatusCode::CREATED, AppJson(created)))
}

pub async fn update(
    State(state): State<ServerState>,
    AppPath(id): AppPath<Uuid>,
    AppJson(changes): AppJson<MediaChanges>,
) -> Result<AppJson<media::Model>, JsonApiError> {
    Ok(AppJson(media_service::update(state.db()?, id, changes).await?))
}

pub async fn delete(
    State(state): State<ServerState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<StatusCode, JsonApiError> {
    media_service::delete(state.db()?, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
