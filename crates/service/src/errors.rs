use models::errors::ModelError;
use thiserror::Error;

/// Failure kinds every store operation can report.
///
/// `InvalidInput` is the caller's fault and is raised before storage is
/// touched. `StorageUnavailable` is transient; callers may retry with backoff,
/// the stores never do.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    pub fn is_retryable(&self) -> bool { matches!(self, Self::StorageUnavailable(_)) }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(msg) => Self::InvalidInput(msg),
            ModelError::NotFound(msg) => Self::NotFound(msg),
            ModelError::UniqueViolation(msg) => Self::InvalidInput(format!("already exists: {msg}")),
            ModelError::Db(msg) => Self::StorageUnavailable(msg),
        }
    }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self { ModelError::from(e).into() }
}
