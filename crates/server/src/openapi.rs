use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Page-content entry as served by `/content`.
#[derive(ToSchema, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentEntryDoc {
    pub id: Uuid,
    pub section: String,
    pub key: String,
    pub value: String,
    #[schema(format = DateTime)]
    pub created_at: String,
    #[schema(format = DateTime)]
    pub updated_at: String,
}

#[derive(ToSchema)]
pub struct ContentInputDoc {
    #[schema(example = "hero", max_length = 100)]
    pub section: String,
    #[schema(example = "title", max_length = 100)]
    pub key: String,
    #[schema(example = "Trade Smarter with Real-Time Data", min_length = 1)]
    pub value: String,
}

#[derive(ToSchema)]
pub struct ErrorBodyDoc {
    #[schema(example = "Validation Error")]
    pub error: String,
    pub message: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::content::list_all,
        crate::routes::content::list_section,
        crate::routes::content::get_entry,
        crate::routes::content::upsert,
        crate::routes::content::update,
        crate::routes::content::delete,
        crate::routes::landing::get_landing,
    ),
    components(
        schemas(
            HealthResponse,
            ContentEntryDoc,
            ContentInputDoc,
            ErrorBodyDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "content", description = "Landing-page copy overrides"),
        (name = "landing")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_paths_are_documented() {
        let doc = ApiDoc::openapi();
        let paths: Vec<_> = doc.paths.paths.keys().cloned().collect();
        for p in ["/content", "/content/{section}", "/content/{section}/{key}", "/admin/content", "/admin/content/{id}"] {
            assert!(paths.iter().any(|x| x == p), "missing {p}");
        }
    }
}
