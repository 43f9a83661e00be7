//! Page-content CMS: keyed copy overrides with fallback defaults.
//!
//! Layers, leaves first:
//! - `domain`: the entry and write payload types.
//! - `repository`: the `ContentStore` seam plus an in-memory store.
//! - `repo::seaorm`: the Postgres-backed store.
//! - `resolver`: pure lookups over a fetched snapshot.
//! - `service`: validation, timeouts and logging around a store.

pub mod domain;
pub mod repository;
pub mod repo;
pub mod resolver;
pub mod service;

pub use domain::{ContentEntry, ContentInput};
pub use repository::ContentStore;
pub use resolver::ContentSnapshot;
pub use service::ContentService;
