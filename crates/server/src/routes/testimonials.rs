use axum::{extract::State, http::StatusCode};
use uuid::Uuid;

use models::testimonial::{self, NewTestimonial, TestimonialChanges};
use service::db::testimonial_service;

use crate::errors::{AppJson, AppPath, JsonApiError};
use crate::state::ServerState;

pub async fn list_visible(State(state): State<ServerState>) -> Result<AppJson<Vec<testimonial::Model>>, JsonApiError> {
    Ok(AppJson(testimonial_service::list_visible(state.db()?, None).await?))
}

pub async fn list_all(State(state): State<ServerState>) -> Result<AppJson<Vec<testimonial::Model>>, JsonApiError> {
    Ok(AppJson(testimonial_service::list_all(state.db()?).await?))
}

pub async fn get(
    State(state): State<ServerState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<AppJson<testimonial::Model>, JsonApiError> {
    testimonial_service::get(state.db()?, id)
        .await?
        .map(AppJson)
        .ok_or_else(|| JsonApiError::not_found("testimonial"))
}

pub async fn create(
    State(state): State<ServerState>,
    AppJson(input): AppJson<NewTestimonial>,
) -> Result<(StatusCode, AppJson<testimonial::Model>), JsonApiError> {
    let created = testimonial_service::create(state.db()?, input).await?;
    Ok((StatusCode::CREATED, AppJson(created)))
}

pub async fn update(
    State(state): State<ServerState>,
    AppPath(id): AppPath<Uuid>,
    AppJson(changes): AppJson<TestimonialChanges>,
) -> Result<AppJson<testimonial::Model>, JsonApiError> {
    Ok(AppJson(testimonial_service::update(state.db()?, id, changes).await?))
}

pub async fn delete(
    State(state): State<ServerState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<StatusCode, JsonApiError> {
    testimonial_service::delete(state.db()?, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
