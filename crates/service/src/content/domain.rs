use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use models::page_content;

/// One `(section, key) -> value` override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentEntry {
    pub id: Uuid,
    pub section: String,
    pub key: String,
    pub value: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<page_content::Model> for ContentEntry {
    fn from(m: page_content::Model) -> Self {
        Self {
            id: m.id,
            section: m.section,
            key: m.key,
            value: m.value,
            created_at: m.created_at.with_timezone(&Utc),
            updated_at: m.updated_at.with_timezone(&Utc),
        }
    }
}

/// Write payload for upsert and update-by-id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentInput {
    pub section: String,
    pub key: String,
    pub value: String,
}

impl ContentInput {
    pub fn new(section: impl Into<String>, key: impl Into<String>, value: impl Into<String>) -> Self {
        Self { section: section.into(), key: key.into(), value: value.into() }
    }
}
