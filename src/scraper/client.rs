// client.rs
use crate::config::ClientConfig;
use crate::db::OffsetStore;
use crate::scraper::{
    DocumentFetcher, HttpTransport, KeywordScanner, ListingBatch, ListingExtractor,
    ReqwestTransport, Result,
};
use tracing::info;

/// Incremental search-page client: fetch, drop what was already delivered,
/// remember the new high-water mark.
pub struct Client<T> {
    fetcher: DocumentFetcher<T>,
    offsets: OffsetStore,
    scanner: KeywordScanner,
    scheme: String,
    site_domain: String,
}

impl Client<ReqwestTransport> {
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(config.timeout())?;
        Self::new(transport, config)
    }
}

impl<T: HttpTransport> Client<T> {
    pub fn new(transport: T, config: &ClientConfig) -> Result<Self> {
        Ok(Self {
            fetcher: DocumentFetcher::new(transport).with_user_agent(config.user_agent.clone()),
            offsets: OffsetStore::new(config.offset_dir.clone(), config.use_stored_offset),
            scanner: KeywordScanner::new()?,
            scheme: config.scheme.clone(),
            site_domain: config.site_domain.clone(),
        })
    }

    pub fn offsets(&self) -> &OffsetStore {
        &self.offsets
    }

    pub fn search_url(&self, location: &str, category: &str) -> String {
        format!(
            "{}://{}.{}/search/{}",
            self.scheme, location, self.site_domain, category
        )
    }

    /// Listings for (location, category) newer than the stored offset.
    ///
    /// The offset is rewritten at the end of every successful pass, even when
    /// nothing new turned up.
    pub fn get_search_list(&self, location: &str, category: &str) -> Result<ListingBatch> {
        let url = self.search_url(location, category);
        let document = self.fetcher.fetch(&url)?;

        let offset = self.offsets.read_watermark(location, category)?;

        let extractor = ListingExtractor::for_location(&self.scheme, location, &self.site_domain)?;
        let (batch, new_offset) = extractor.extract(&document, offset);

        self.offsets
            .write_watermark(location, category, new_offset)?;

        info!(
            location,
            category,
            new_listings = batch.len(),
            offset,
            new_offset,
            "search list fetched"
        );
        Ok(batch)
    }

    /// Keywords (as given) found in the ad's posting body.
    pub fn search_page_for_keywords<S: AsRef<str>>(
        &self,
        url: &str,
        keywords: &[S],
    ) -> Result<Vec<String>> {
        self.scanner.scan(&self.fetcher, url, keywords)
    }
}
