//! CRUD over the landing-page domain tables.
//!
//! Validation lives next to the entities in `models`; these functions add the
//! read paths, the visibility filters used by the public listing and the
//! partial-update / idempotent-delete semantics of the admin surface.

pub mod stock_service;
pub mod news_service;
pub mod testimonial_service;
pub mod media_service;
