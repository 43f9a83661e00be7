//! Server-side composition of the landing page.
//!
//! Every copy slot resolves against one content snapshot with the factory
//! default as fallback, so the page renders even when page content is empty
//! or unreachable.

use sea_orm::DatabaseConnection;
use serde::Serialize;

use models::{news_article, stock, testimonial};

use crate::content::{ContentService, ContentSnapshot, ContentStore};
use crate::db::{news_service, stock_service, testimonial_service};
use crate::errors::ServiceError;

pub const STOCK_SLOTS: usize = 6;
pub const SIDEBAR_NEWS_SLOTS: usize = 3;
pub const TESTIMONIAL_SLOTS: usize = 6;

/// Factory-default copy, keyed the same way as `page_content`.
pub mod defaults {
    pub const HERO_TITLE: &str = "Trade Smarter with Real-Time Data";
    pub const HERO_SUBTITLE: &str = "Access professional-grade trading tools, real-time market analytics, and expert insights. Start your journey to financial success with our advanced platform.";
    pub const HERO_BUTTON_PRIMARY: &str = "Start Trading Free";
    pub const HERO_BUTTON_SECONDARY: &str = "Watch Demo";

    pub const FEATURES_TITLE: &str = "Why Choose TradePro?";
    pub const FEATURES_SUBTITLE: &str = "Professional trading tools designed for serious investors";
    pub const FEATURES: [(&str, &str); 3] = [
        (
            "Lightning Fast Execution",
            "Execute trades in milliseconds with our advanced technology infrastructure and direct market access.",
        ),
        (
            "Advanced Analytics",
            "Make informed decisions with comprehensive charts, technical indicators, and market analysis tools.",
        ),
        (
            "Bank-Level Security",
            "Your investments are protected with 256-bit encryption and two-factor authentication.",
        ),
    ];

    pub const ABOUT_TITLE: &str = "About Our Platform";
    pub const ABOUT_CONTENT: &str = "We provide cutting-edge financial technology that empowers investors to make data-driven decisions. Our platform combines real-time market data with advanced analytics to give you the edge you need in today's fast-paced markets.";
    pub const ABOUT_IMAGE: &str = "https://images.unsplash.com/photo-1551288049-bebda4e38f71?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=2070&q=80";
    pub const ABOUT_IMAGE_ALT: &str = "About section image showing financial charts";
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HeroCopy {
    pub title: String,
    pub subtitle: String,
    pub button_primary: String,
    pub button_secondary: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FeatureCopy {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FeaturesCopy {
    pub title: String,
    pub subtitle: String,
    pub items: Vec<FeatureCopy>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AboutCopy {
    pub title: String,
    pub content: String,
    pub image: String,
    pub image_alt: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsBlock {
    pub featured: Option<news_article::Model>,
    pub sidebar: Vec<news_article::Model>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingPage {
    pub hero: HeroCopy,
    pub features: FeaturesCopy,
    pub about: AboutCopy,
    pub stocks: Vec<stock::Model>,
    pub news: NewsBlock,
    pub testimonials: Vec<testimonial::Model>,
}

pub fn hero(snap: &ContentSnapshot) -> HeroCopy {
    HeroCopy {
        title: snap.get("hero", "title", defaults::HERO_TITLE),
        subtitle: snap.get("hero", "subtitle", defaults::HERO_SUBTITLE),
        button_primary: snap.get("hero", "button_primary", defaults::HERO_BUTTON_PRIMARY),
        button_secondary: snap.get("hero", "button_secondary", defaults::HERO_BUTTON_SECONDARY),
    }
}

pub fn features(snap: &ContentSnapshot) -> FeaturesCopy {
    let items = defaults::FEATURES
        .iter()
        .enumerate()
        .map(|(i, (title, description))| FeatureCopy {
            title: snap.get("features", &format!("feature_{}_title", i + 1), title),
            description: snap.get("features", &format!("feature_{}_description", i + 1), description),
        })
        .collect();
    FeaturesCopy {
        title: snap.get("features", "title", defaults::FEATURES_TITLE),
        subtitle: snap.get("features", "subtitle", defaults::FEATURES_SUBTITLE),
        items,
    }
}

pub fn about(snap: &ContentSnapshot) -> AboutCopy {
    AboutCopy {
        title: snap.get("about", "title", defaults::ABOUT_TITLE),
        content: snap.get("about", "content", defaults::ABOUT_CONTENT),
        image: snap.get("about", "image", defaults::ABOUT_IMAGE),
        image_alt: snap.get("about", "image_alt", defaults::ABOUT_IMAGE_ALT),
    }
}

/// Assemble the page from a snapshot and the visible domain lists.
///
/// Lists are expected in display order; inactive or unpublished rows are
/// dropped here as well so callers may pass unfiltered data.
pub fn compose(
    snap: &ContentSnapshot,
    stocks: Vec<stock::Model>,
    news: Vec<news_article::Model>,
    testimonials: Vec<testimonial::Model>,
) -> LandingPage {
    let stocks = stocks.into_iter().filter(|s| s.is_active).take(STOCK_SLOTS).collect();
    let mut published = news.into_iter().filter(|a| a.is_published);
    let featured = published.next();
    let sidebar = published.take(SIDEBAR_NEWS_SLOTS).collect();
    let testimonials = testimonials.into_iter().filter(|t| t.is_active).take(TESTIMONIAL_SLOTS).collect();

    LandingPage {
        hero: hero(snap),
        features: features(snap),
        about: about(snap),
        stocks,
        news: NewsBlock { featured, sidebar },
        testimonials,
    }
}

/// Fetch everything the page needs and compose it.
///
/// Content failures degrade to defaults; domain list failures are returned.
/// Without a database (`db = None`) the domain lists are empty.
pub async fn load<S: ContentStore + ?Sized>(
    content: &ContentService<S>,
    db: Option<&DatabaseConnection>,
) -> Result<LandingPage, ServiceError> {
    let snap = content.snapshot().await;
    let Some(db) = db else {
        return Ok(compose(&snap, vec![], vec![], vec![]));
    };
    let stocks = stock_service::list_visible(db, Some(STOCK_SLOTS as u64)).await?;
    let news = news_service::list_visible(db, Some((1 + SIDEBAR_NEWS_SLOTS) as u64)).await?;
    let testimonials = testimonial_service::list_visible(db, Some(TESTIMONIAL_SLOTS as u64)).await?;
    Ok(compose(&snap, stocks, news, testimonials))
}
