use axum::{extract::State, http::StatusCode};
use uuid::Uuid;

use models::stock::{self, NewStock, StockChanges};
use service::db::stock_service;

use crate::errors::{AppJson, AppPath, JsonApiError};
use crate::state::ServerState;

/// Active stocks for the ticker, most recently updated first.
pub async fn list_visible(State(state): State<ServerState>) -> Result<AppJson<Vec<stock::Model>>, JsonApiError> {
    Ok(AppJson(stock_service::list_visible(state.db()?, None).await?))
}

pub async fn list_all(State(state): State<ServerState>) -> Result<AppJson<Vec<stock::Model>>, JsonApiError> {
    Ok(AppJson(stock_service::list_all(state.db()?).await?))
}

pub async fn get(
    State(state): State<ServerState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<AppJson<stock::Model>, JsonApiError> {
    stock_service::get(state.db()?, id)
        .await?
        .map(AppJson)
        .ok_or_else(|| JsonApiError::not_found("stock"))
}

pub async fn create(
    State(state): State<ServerState>,
    AppJson(input): AppJson<NewStock>,
) -> Result<(StatusCode, AppJson<stock::Model>), JsonApiError> {
    let created = stock_service::create(state.db()?, input).await?;
    Ok((StatusCode::CREATED, AppJson(created)))
}

pub async fn update(
    State(state): State<ServerState>,
    AppPath(id): AppPath<Uuid>,
    AppJson(changes): AppJson<StockChanges>,
) -> Result<AppJson<stock::Model>, JsonApiError> {
    Ok(AppJson(stock_service::update(state.db()?, id, changes).await?))
}

pub async fn delete(
    State(state): State<ServerState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<StatusCode, JsonApiError> {
    stock_service::delete(state.db()?, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
