use axum::extract::State;

use service::landing::{self, LandingPage};

use crate::errors::{AppJson, JsonApiError};
use crate::state::ServerState;

/// Fully resolved landing page; copy slots fall back to factory defaults.
#[utoipa::path(get, path = "/landing", tag = "landing",
    responses((status = 200, description = "Composed landing page"), (status = 503, description = "Domain storage unavailable", body = crate::openapi::ErrorBodyDoc)))]
pub async fn get_landing(State(state): State<ServerState>) -> Result<AppJson<LandingPage>, JsonApiError> {
    let page = landing::load(&state.content, state.db.as_ref()).await?;
    Ok(AppJson(page))
}
