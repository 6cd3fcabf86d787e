// fetcher.rs
use crate::scraper::{Result, ScraperError};
use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;
use scraper::Html;
use std::time::Duration;
use tracing::{debug, warn};

/// The listing site serves stripped-down markup (or nothing) to unknown clients.
pub const GOOGLEBOT_USER_AGENT: &str =
    "Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)";

/// A single blocking GET. Implementations return the raw body bytes.
pub trait HttpTransport {
    fn get(&self, url: &str, user_agent: &str) -> Result<Vec<u8>>;
}

impl<T: HttpTransport + ?Sized> HttpTransport for &T {
    fn get(&self, url: &str, user_agent: &str) -> Result<Vec<u8>> {
        (**self).get(url, user_agent)
    }
}

impl<T: HttpTransport + ?Sized> HttpTransport for Box<T> {
    fn get(&self, url: &str, user_agent: &str) -> Result<Vec<u8>> {
        (**self).get(url, user_agent)
    }
}

pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ScraperError::Transport(e.to_string()))?;

        Ok(Self { client })
    }
}

impl HttpTransport for ReqwestTransport {
    fn get(&self, url: &str, user_agent: &str) -> Result<Vec<u8>> {
        let resp = self
            .client
            .get(url)
            .header(USER_AGENT, user_agent)
            .send()
            .map_err(|e| ScraperError::Transport(format!("{url}: {e}")))?;

        // Error pages still carry markup; the extractor just finds no rows.
        let status = resp.status();
        if !status.is_success() {
            warn!(%url, %status, "non-success status, parsing body anyway");
        }

        let body = resp
            .bytes()
            .map_err(|e| ScraperError::Transport(format!("{url}: {e}")))?;
        Ok(body.to_vec())
    }
}

/// Fetches a URL and hands back a parsed document. One attempt, no retries.
pub struct DocumentFetcher<T> {
    transport: T,
    user_agent: String,
}

impl<T: HttpTransport> DocumentFetcher<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            user_agent: GOOGLEBOT_USER_AGENT.to_string(),
        }
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn fetch(&self, url: &str) -> Result<Html> {
        debug!(%url, "fetching page");
        let body = self.transport.get(url, &self.user_agent)?;
        let text = String::from_utf8(body)
            .map_err(|e| ScraperError::Parse(format!("body of {url} is not UTF-8: {e}")))?;
        Ok(Html::parse_document(&text))
    }
}
