use axum::{extract::State, http::StatusCode};
use uuid::Uuid;

use models::news_article::{self, NewArticle, ArticleChanges};
use service::db::news_service;

use crate::errors::{AppJson, AppPath, JsonApiError};
use crate::state::ServerState;

/// Published articles, newest first.
pub async fn list_visible(State(state): State<ServerState>) -> Result<AppJson<Vec<news_article::Model>>, JsonApiError> {
    Ok(AppJson(news_service::list_visible(state.db()?, None).await?))
}

pub async fn list_all(State(state): State<ServerState>) -> Result<AppJson<Vec<news_article::Model>>, JsonApiError> {
    Ok(AppJson(news_service::list_all(state.db()?).await?))
}

pub async fn get(
    State(state): State<ServerState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<AppJson<news_article::Model>, JsonApiError> {
    news_service::get(state.db()?, id)
        .await?
        .map(AppJson)
        .ok_or_else(|| JsonApiError::not_found("news article"))
}

pub async fn create(
    State(state): State<ServerState>,
    AppJson(input): AppJson<NewArticle>,
) -> Result<(StatusCode, AppJson<news_article::Model>), JsonApiError> {
    let created = news_service::create(state.db()?, input).await?;
    Ok((StatusCode::CREATED, AppJson(created)))
}

pub async fn update(
    State(state): State<ServerState>,
    AppPath(id): AppPath<Uuid>,
    AppJson(changes): AppJson<ArticleChanges>,
) -> Result<AppJson<news_article::Model>, JsonApiError> {
    Ok(AppJson(news_service::update(state.db()?, id, changes).await?))
}

pub async fn delete(
    State(state): State<ServerState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<StatusCode, JsonApiError> {
    news_service::delete(state.db()?, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
