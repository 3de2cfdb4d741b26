//! Renders a catalog of academic articles into a listing page and per-article
//! detail pages.

pub mod address;
pub mod article;
pub mod catalog;
pub mod config;
pub mod detail;
pub mod error;
pub mod listing;
pub mod section_titles;
pub mod site;
pub mod view;

pub use address::RequestedId;
pub use article::{Article, ArticleId};
pub use catalog::Catalog;
pub use config::SiteConfig;
pub use detail::{render_detail, DetailOutcome, NOT_FOUND_MESSAGE};
pub use error::{Error, Result};
pub use listing::render_listing;
pub use section_titles::{format_section_key, SectionTitles};
pub use site::{build_site, detail_page, listing_page, BuildReport, DetailPage};
pub use view::Container;
