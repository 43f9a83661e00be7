//! Fallback-aware lookups over a content snapshot.
//!
//! Nothing here performs I/O or fails: a missing snapshot, a missing section
//! or a missing key all degrade to the caller's fallback, so page code can
//! treat every content slot as always present.

use std::collections::BTreeMap;

use super::domain::ContentEntry;

/// Value of the first entry matching `(section, key)`, else `fallback`.
///
/// `None` stands for a snapshot that has not been loaded (yet).
///
/// # Examples
/// ```
/// use service::content::resolver::resolve;
/// assert_eq!(resolve(None, "hero", "title", "Default Title"), "Default Title");
/// ```
pub fn resolve(snapshot: Option<&[ContentEntry]>, section: &str, key: &str, fallback: &str) -> String {
    snapshot
        .and_then(|entries| entries.iter().find(|e| e.section == section && e.key == key))
        .map(|e| e.value.clone())
        .unwrap_or_else(|| fallback.to_string())
}

/// Every `key -> value` of `section`. When a snapshot holds duplicates the
/// first one wins, matching [`resolve`].
pub fn resolve_section(snapshot: Option<&[ContentEntry]>, section: &str) -> BTreeMap<String, String> {
    let mut out = BTreeMap::new();
    for e in snapshot.unwrap_or_default().iter().filter(|e| e.section == section) {
        out.entry(e.key.clone()).or_insert_with(|| e.value.clone());
    }
    out
}

/// A point-in-time read of the content store, possibly not loaded.
#[derive(Debug, Clone, Default)]
pub struct ContentSnapshot {
    entries: Option<Vec<ContentEntry>>,
}

impl ContentSnapshot {
    pub fn loaded(entries: Vec<ContentEntry>) -> Self { Self { entries: Some(entries) } }

    pub fn pending() -> Self { Self { entries: None } }

    pub fn is_loaded(&self) -> bool { self.entries.is_some() }

    pub fn entries(&self) -> Option<&[ContentEntry]> { self.entries.as_deref() }

    pub fn get(&self, section: &str, key: &str, fallback: &str) -> String {
        resolve(self.entries(), section, key, fallback)
    }

    pub fn section(&self, section: &str) -> BTreeMap<String, String> {
        resolve_section(self.entries(), section)
    }
}
