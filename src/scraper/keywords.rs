use crate::scraper::{DocumentFetcher, HttpTransport, Result, ScraperError};
use scraper::{Html, Selector};
use tracing::debug;

const POSTING_BODY_SELECTOR: &str = "#postingbody";

/// Looks for caller-supplied keywords in the body of a single ad page.
pub struct KeywordScanner {
    body: Selector,
}

impl KeywordScanner {
    pub fn new() -> Result<Self> {
        let body = Selector::parse(POSTING_BODY_SELECTOR)
            .map_err(|e| ScraperError::Parse(format!("selector {POSTING_BODY_SELECTOR:?}: {e}")))?;
        Ok(Self { body })
    }

    pub fn scan<T, S>(
        &self,
        fetcher: &DocumentFetcher<T>,
        url: &str,
        keywords: &[S],
    ) -> Result<Vec<String>>
    where
        T: HttpTransport,
        S: AsRef<str>,
    {
        let document = fetcher.fetch(url)?;
        let found = match_keywords(&self.body_text(&document), keywords);
        debug!(%url, checked = keywords.len(), found = found.len(), "scanned ad page");
        Ok(found)
    }

    /// Text of the first posting body, or `""` when the page has none.
    pub fn body_text(&self, document: &Html) -> String {
        document
            .select(&self.body)
            .next()
            .map(|el| el.text().collect())
            .unwrap_or_default()
    }
}

/// Case-insensitive containment test. Keywords are trimmed before matching but
/// returned exactly as given, in input order. A blank keyword matches anything.
pub fn match_keywords<S: AsRef<str>>(text: &str, keywords: &[S]) -> Vec<String> {
    let haystack = text.to_lowercase();
    keywords
        .iter()
        .map(|k| k.as_ref())
        .filter(|k| haystack.contains(&k.trim().to_lowercase()))
        .map(str::to_string)
        .collect()
}
