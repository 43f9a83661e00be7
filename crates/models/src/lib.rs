//! SeaORM entities for the landing page and its CMS.
//!
//! Each entity module carries its table model, the request payloads the
//! admin surface accepts, field validation and the insert path. Reads,
//! updates and deletes live in the `service` crate.

pub mod errors;
pub mod db;
pub mod stock;
pub mod news_article;
pub mod testimonial;
pub mod page_content;
pub mod media;

#[cfg(test)]
mod tests;
