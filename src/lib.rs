//! Incremental scraping of classified-ad search pages.
//!
//! [`Client::get_search_list`] returns only listings newer than the last pass
//! for a (location, category) pair, tracked by a per-pair offset file.
//! [`Client::search_page_for_keywords`] checks a single ad for keywords.

pub mod config;
pub mod db;
pub mod logging;
pub mod scraper;

#[cfg(test)]
mod tests;

pub use crate::config::ClientConfig;
pub use crate::db::OffsetStore;
pub use crate::scraper::{Client, ListingBatch, ListingRecord, ScraperError};
