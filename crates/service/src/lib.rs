//! Service layer for the landing page CMS.
//! - `content`: page-content store seam, fallback resolver and service.
//! - `db`: CRUD over stocks, news, testimonials and media.
//! - `landing` / `seed`: page composition and factory data.
//! - Reuses validation and entity definitions in the `models` crate.

pub mod errors;
pub mod content;
pub mod db;
pub mod landing;
pub mod seed;
#[cfg(test)]
pub mod test_support;
