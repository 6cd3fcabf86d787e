// extractor.rs
use crate::scraper::{ListingBatch, ListingRecord, Result, ScraperError};
use scraper::{ElementRef, Html, Selector};
use tracing::debug;
use url::Url;

const ROW_SELECTOR: &str = ".content .row";
const TITLE_LINK_SELECTOR: &str = ".hdrlnk";
const LOCATION_SELECTOR: &str = ".l2 .pnr small";
const POST_DATE_SELECTOR: &str = ".pl time";
const IMAGE_MARKER_SELECTOR: &str = ".l2 .pnr .px .p";

/// The marker span reads exactly this when the ad has photos. Nothing looser.
pub const IMAGE_MARKER_TEXT: &str = " pic";

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ScraperError::Parse(format!("selector {css:?}: {e}")))
}

/// Turns a search results page into records newer than a watermark.
pub struct ListingExtractor {
    base_url: Url,
    row: Selector,
    title_link: Selector,
    location: Selector,
    post_date: Selector,
    image_marker: Selector,
}

impl ListingExtractor {
    /// `base_url` is what relative ad links are resolved against,
    /// e.g. `http://sfbay.craigslist.org/`.
    pub fn new(base_url: Url) -> Result<Self> {
        Ok(Self {
            base_url,
            row: selector(ROW_SELECTOR)?,
            title_link: selector(TITLE_LINK_SELECTOR)?,
            location: selector(LOCATION_SELECTOR)?,
            post_date: selector(POST_DATE_SELECTOR)?,
            image_marker: selector(IMAGE_MARKER_SELECTOR)?,
        })
    }

    pub fn for_location(scheme: &str, location: &str, site_domain: &str) -> Result<Self> {
        let raw = format!("{scheme}://{location}.{site_domain}/");
        let base_url =
            Url::parse(&raw).map_err(|e| ScraperError::Parse(format!("base url {raw}: {e}")))?;
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the rows whose id is strictly above `prior_watermark`, in
    /// document order, and the highest id among them (or `prior_watermark`
    /// when none pass). Rows without a numeric id are skipped.
    pub fn extract(&self, document: &Html, prior_watermark: i64) -> (ListingBatch, i64) {
        let mut batch = ListingBatch::default();
        let mut watermark = prior_watermark;

        for row in document.select(&self.row) {
            let Some(record) = self.parse_row(row) else {
                continue;
            };

            if record.id > prior_watermark {
                watermark = watermark.max(record.id);
                batch.records.push(record);
            }
        }

        (batch, watermark)
    }

    fn parse_row(&self, row: ElementRef) -> Option<ListingRecord> {
        let raw_id = row.value().attr("data-pid").unwrap_or_default();
        let id = match raw_id.parse::<i64>() {
            Ok(id) => id,
            Err(e) => {
                debug!(raw_id, error = %e, "skipping row without numeric id");
                return None;
            }
        };

        let link = row.select(&self.title_link).next();
        let title = link.map(text_of).unwrap_or_default();
        let href = link
            .and_then(|a| a.value().attr("href"))
            .unwrap_or_default();

        let location = self.first_text(row, &self.location).trim().to_string();

        let post_date = row
            .select(&self.post_date)
            .next()
            .and_then(|t| t.value().attr("datetime"))
            .unwrap_or_default()
            .to_string();

        let has_image = self.first_text(row, &self.image_marker) == IMAGE_MARKER_TEXT;

        Some(ListingRecord {
            id,
            title,
            location,
            url: self.absolute_url(href),
            post_date,
            has_image,
        })
    }

    fn first_text(&self, row: ElementRef, selector: &Selector) -> String {
        row.select(selector).next().map(text_of).unwrap_or_default()
    }

    fn absolute_url(&self, href: &str) -> String {
        match self.base_url.join(href) {
            Ok(url) => url.to_string(),
            Err(_) => format!("{}{}", self.base_url.as_str().trim_end_matches('/'), href),
        }
    }
}

fn text_of(element: ElementRef) -> String {
    element.text().collect()
}
