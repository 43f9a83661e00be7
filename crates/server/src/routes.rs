use std::path::Path;

use axum::{
    routing::{get, post, put},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::openapi::ApiDoc;
use crate::state::ServerState;

pub mod content;
pub mod landing;
pub mod media;
pub mod news;
pub mod stocks;
pub mod testimonials;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

fn public_routes() -> Router<ServerState> {
    Router::new()
        .route("/health", get(health))
        .route("/content", get(content::list_all))
        .route("/content/:section", get(content::list_section))
        .route("/content/:section/:key", get(content::get_entry))
        .route("/landing", get(landing::get_landing))
        .route("/stocks", get(stocks::list_visible))
        .route("/news", get(news::list_visible))
        .route("/testimonials", get(testimonials::list_visible))
        .route("/media", get(media::list_all))
}

fn admin_routes() -> Router<ServerState> {
    Router::new()
        .route("/admin/content", post(content::upsert))
        .route("/admin/content/:id", put(content::update).delete(content::delete))
        .route("/admin/stocks", get(stocks::list_all).post(stocks::create))
        .route("/admin/stocks/:id", get(stocks::get).put(stocks::update).delete(stocks::delete))
        .route("/admin/news", get(news::list_all).post(news::create))
        .route("/admin/news/:id", get(news::get).put(news::update).delete(news::delete))
        .route("/admin/testimonials", get(testimonials::list_all).post(testimonials::create))
        .route(
            "/admin/testimonials/:id",
            get(testimonials::get).put(testimonials::update).delete(testimonials::delete),
        )
        .route("/admin/media", get(media::list_all).post(media::create))
        .route("/admin/media/:id", get(media::get).put(media::update).delete(media::delete))
}

/// Build the full application router: public reads, admin writes, API docs
/// and, when `frontend_dir` is given, the built landing page as fallback.
pub fn build_router(state: ServerState, cors: CorsLayer, frontend_dir: Option<&str>) -> Router {
    let mut app = public_routes()
        .merge(admin_routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    if let Some(dir) = frontend_dir {
        let index = Path::new(dir).join("index.html");
        app = app.fallback_service(ServeDir::new(dir).fallback(ServeFile::new(index)));
    }

    app.with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx and transport failures
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
