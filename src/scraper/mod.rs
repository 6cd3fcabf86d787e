mod client;
mod extractor;
mod fetcher;
mod keywords;
mod models;
mod scraper_error;

pub use client::Client;
pub use extractor::{ListingExtractor, IMAGE_MARKER_TEXT};
pub use fetcher::{DocumentFetcher, HttpTransport, ReqwestTransport, GOOGLEBOT_USER_AGENT};
pub use keywords::{match_keywords, KeywordScanner};
pub use models::{ListingBatch, ListingRecord};
pub use scraper_error::{Result, ScraperError};
