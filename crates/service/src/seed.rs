//! Factory data for a fresh database.

use rust_decimal::Decimal;
use sea_orm::{ConnectionTrait, DatabaseConnection, EntityTrait, PaginatorTrait, TransactionTrait};
use tracing::info;

use models::news_article::NewArticle;
use models::stock::{self, NewStock};
use models::testimonial::NewTestimonial;

use crate::content::{ContentInput, ContentService, ContentStore};
use crate::db::{news_service, stock_service, testimonial_service};
use crate::errors::ServiceError;

/// What a seeding run wrote.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub stocks: usize,
    pub news: usize,
    pub testimonials: usize,
    pub content: usize,
}

impl SeedReport {
    pub fn is_empty(&self) -> bool { *self == Self::default() }
}

fn price(cents: i64) -> Decimal { Decimal::new(cents, 2) }

pub fn default_stocks() -> Vec<NewStock> {
    [
        ("AAPL", "Apple Inc.", 17543, 215, 124, 45_678_900, "2.75T", "Technology"),
        ("GOOGL", "Alphabet Inc.", 14256, -123, -85, 23_456_700, "1.80T", "Technology"),
        ("MSFT", "Microsoft Corporation", 37885, 567, 152, 34_567_800, "2.80T", "Technology"),
        ("TSLA", "Tesla, Inc.", 24842, -321, -128, 56_789_000, "790B", "Automotive"),
        ("AMZN", "Amazon.com, Inc.", 14524, 189, 132, 67_890_100, "1.50T", "Consumer Cyclical"),
        ("NVDA", "NVIDIA Corporation", 48509, 1245, 263, 45_678_900, "1.20T", "Technology"),
    ]
    .into_iter()
    .map(|(symbol, name, p, c, pct, volume, cap, sector)| NewStock {
        symbol: symbol.into(),
        name: name.into(),
        price: price(p),
        change: price(c),
        change_percent: price(pct),
        volume,
        market_cap: Some(cap.into()),
        sector: Some(sector.into()),
        is_active: true,
    })
    .collect()
}

pub fn default_news() -> Vec<NewArticle> {
    [
        (
            "Tech Stocks Rally as AI Innovation Drives Market Growth",
            "Major technology companies are experiencing significant growth as artificial intelligence continues to revolutionize various industries.",
            "Major technology companies are experiencing significant growth as artificial intelligence continues to revolutionize various industries. Analysts predict continued momentum in the tech sector.",
            "Technology",
            "Financial Times",
        ),
        (
            "Federal Reserve Signals Potential Rate Cuts in 2024",
            "The Federal Reserve has indicated possible interest rate reductions in the coming year.",
            "The Federal Reserve has indicated possible interest rate reductions in the coming year, which could provide a boost to equity markets and economic growth.",
            "Economy",
            "Wall Street Journal",
        ),
        (
            "Green Energy Stocks Surge on Climate Policy Updates",
            "Renewable energy companies are seeing increased investor interest.",
            "Renewable energy companies are seeing increased investor interest as governments worldwide implement more aggressive climate policies and incentives.",
            "Energy",
            "Bloomberg",
        ),
        (
            "Earnings Season Exceeds Expectations for Major Corporations",
            "Q4 earnings reports are showing stronger-than-expected results across multiple sectors.",
            "Q4 earnings reports are showing stronger-than-expected results across multiple sectors, with particularly strong performance in consumer goods and healthcare.",
            "Earnings",
            "Reuters",
        ),
    ]
    .into_iter()
    .map(|(title, excerpt, content, category, author)| NewArticle {
        title: title.into(),
        excerpt: excerpt.into(),
        content: content.into(),
        image_url: None,
        category: category.into(),
        author: author.into(),
        published_at: None,
        is_published: true,
    })
    .collect()
}

pub fn default_testimonials() -> Vec<NewTestimonial> {
    [
        (
            "Sarah Johnson",
            "Portfolio Manager",
            "Global Investments Ltd",
            "This platform has revolutionized how I track market movements. The real-time data and intuitive interface make it my go-to tool for investment decisions.",
        ),
        (
            "Michael Chen",
            "Day Trader",
            "Independent Trader",
            "The speed and accuracy of the stock data is incredible. I've been able to make more informed trades and improve my success rate significantly.",
        ),
        (
            "Emily Rodriguez",
            "Financial Analyst",
            "Meridian Capital",
            "As a financial analyst, I need reliable data and comprehensive market insights. This platform delivers exactly what I need to provide accurate recommendations.",
        ),
        (
            "David Thompson",
            "Retail Investor",
            "Individual Investor",
            "I'm new to investing and this platform has made it so much easier to understand the market. The educational content and user-friendly design are excellent.",
        ),
    ]
    .into_iter()
    .map(|(name, role, company, content)| NewTestimonial {
        name: name.into(),
        role: role.into(),
        company: Some(company.into()),
        content: content.into(),
        rating: 5,
        avatar_url: None,
        is_active: true,
    })
    .collect()
}

pub fn default_content() -> Vec<ContentInput> {
    vec![
        ContentInput::new("hero", "title", "Master the Markets with Real-Time Trading Data"),
        ContentInput::new(
            "hero",
            "subtitle",
            "Get instant access to live stock prices, market analysis, and trading insights. Make informed decisions with our comprehensive financial platform.",
        ),
        ContentInput::new("hero", "button_primary", "Start Trading Now"),
        ContentInput::new("features", "title", "Why Choose Our Platform"),
        ContentInput::new(
            "features",
            "subtitle",
            "Experience the power of real-time market data and advanced trading tools designed for both beginners and experienced investors.",
        ),
        ContentInput::new("about", "title", "About Our Platform"),
        ContentInput::new(
            "about",
            "content",
            "We provide cutting-edge financial technology that empowers investors to make data-driven decisions. Our platform combines real-time market data with advanced analytics to give you the edge you need in today's fast-paced markets.",
        ),
    ]
}

/// Upsert the factory page content; safe to run repeatedly.
pub async fn seed_content<S: ContentStore + ?Sized>(content: &ContentService<S>) -> Result<usize, ServiceError> {
    let inputs = default_content();
    let n = inputs.len();
    for input in inputs {
        content.upsert(input).await?;
    }
    Ok(n)
}

/// Insert the factory stocks, news and testimonials through `conn`.
pub async fn insert_factory_rows<C: ConnectionTrait>(conn: &C) -> Result<SeedReport, ServiceError> {
    let mut report = SeedReport::default();
    for s in default_stocks() {
        stock_service::create(conn, s).await?;
        report.stocks += 1;
    }
    for a in default_news() {
        news_service::create(conn, a).await?;
        report.news += 1;
    }
    for t in default_testimonials() {
        testimonial_service::create(conn, t).await?;
        report.testimonials += 1;
    }
    Ok(report)
}

/// Seed everything when the stocks table is empty; otherwise a no-op.
///
/// Domain rows go in one transaction, so a failed run leaves the stocks
/// table empty and the next start seeds again. Page content is upserted
/// afterwards through the content store.
pub async fn seed_if_empty<S: ContentStore + ?Sized>(
    db: &DatabaseConnection,
    content: &ContentService<S>,
) -> Result<SeedReport, ServiceError> {
    let existing = stock::Entity::find().count(db).await?;
    if existing > 0 {
        info!(stocks = existing, "seed skipped, database not empty");
        return Ok(SeedReport::default());
    }

    let txn = db.begin().await?;
    let mut report = insert_factory_rows(&txn).await?;
    txn.commit().await?;

    report.content = seed_content(content).await?;
    info!(
        stocks = report.stocks,
        news = report.news,
        testimonials = report.testimonials,
        content = report.content,
        "database seeded"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::repository::memory::MemoryContentStore;
    use std::sync::Arc;

    #[test]
    fn factory_data_is_valid() {
        for s in default_stocks() {
            assert!(stock::normalize_symbol(&s.symbol).is_ok(), "{}", s.symbol);
        }
        assert_eq!(default_stocks().len(), 6);
        assert_eq!(default_news().len(), 4);
        assert!(default_testimonials().iter().all(|t| t.rating == 5));
        for c in default_content() {
            assert!(models::page_content::validate_entry(&c.section, &c.key, &c.value).is_ok());
        }
    }

    #[tokio::test]
    async fn factory_rows_roll_back_with_their_transaction() -> anyhow::Result<()> {
        use sea_orm::{ColumnTrait, QueryFilter};

        let Some(db) = crate::test_support::get_db().await? else { return Ok(()) };
        let symbols: Vec<String> = default_stocks().into_iter().map(|s| s.symbol).collect();
        let factory = || stock::Entity::find().filter(stock::Column::Symbol.is_in(symbols.clone()));
        let before = factory().count(&db).await?;

        let txn = db.begin().await?;
        // fails part way when the factory rows already exist; either way nothing persists
        let _ = insert_factory_rows(&txn).await;
        txn.rollback().await?;

        assert_eq!(factory().count(&db).await?, before);
        Ok(())
    }

    #[tokio::test]
    async fn content_seed_is_repeatable() {
        let svc = ContentService::new(Arc::new(MemoryContentStore::new()));
        let first = seed_content(&svc).await.unwrap();
        let second = seed_content(&svc).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(svc.get_all().await.unwrap().len(), first);
        let about = svc.get_by_key("about", "title").await.unwrap().unwrap();
        assert_eq!(about.value, "About Our Platform");
    }
}
