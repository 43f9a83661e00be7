//! Migrator registering the landing-page tables.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240601_000001_create_stocks;
mod m20240601_000002_create_news_articles;
mod m20240601_000003_create_testimonials;
mod m20240601_000004_create_page_content;
mod m20240601_000005_create_media;
mod m20240601_000006_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240601_000001_create_stocks::Migration),
            Box::new(m20240601_000002_create_news_articles::Migration),
            Box::new(m20240601_000003_create_testimonials::Migration),
            Box::new(m20240601_000004_create_page_content::Migration),
            Box::new(m20240601_000005_create_media::Migration),
            // Indexes should always be applied last
            Box::new(m20240601_000006_add_indexes::Migration),
        ]
    }
}
