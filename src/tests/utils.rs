// src/tests/utils.rs
use crate::config::ClientConfig;
use crate::scraper::{HttpTransport, Result, ScraperError};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;

/// Serves canned bodies by exact URL and records every request made.
#[derive(Default)]
pub struct StubTransport {
    pages: RefCell<HashMap<String, Vec<u8>>>,
    requests: RefCell<Vec<(String, String)>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn serve(&self, url: &str, body: impl Into<Vec<u8>>) {
        self.pages.borrow_mut().insert(url.to_string(), body.into());
    }

    /// (url, user agent) pairs in request order.
    pub fn requests(&self) -> Vec<(String, String)> {
        self.requests.borrow().clone()
    }
}

impl HttpTransport for StubTransport {
    fn get(&self, url: &str, user_agent: &str) -> Result<Vec<u8>> {
        self.requests
            .borrow_mut()
            .push((url.to_string(), user_agent.to_string()));
        self.pages
            .borrow()
            .get(url)
            .cloned()
            .ok_or_else(|| ScraperError::Transport(format!("{url}: connection refused")))
    }
}

/// Builder for one `.row` of a search results page.
pub struct Row {
    id: Option<String>,
    title: String,
    href: Option<String>,
    location: Option<String>,
    datetime: Option<String>,
    marker: Option<String>,
}

impl Row {
    pub fn new(id: i64) -> Self {
        Self {
            id: Some(id.to_string()),
            title: format!("Listing {id}"),
            href: Some(format!("/fuo/{id}.html")),
            location: Some(" (Downtown) ".to_string()),
            datetime: Some("2016-01-02 13:45".to_string()),
            marker: Some(" pic".to_string()),
        }
    }

    pub fn raw_id(mut self, id: Option<&str>) -> Self {
        self.id = id.map(str::to_string);
        self
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn href(mut self, href: Option<&str>) -> Self {
        self.href = href.map(str::to_string);
        self
    }

    pub fn location(mut self, location: Option<&str>) -> Self {
        self.location = location.map(str::to_string);
        self
    }

    pub fn datetime(mut self, datetime: Option<&str>) -> Self {
        self.datetime = datetime.map(str::to_string);
        self
    }

    pub fn marker(mut self, marker: Option<&str>) -> Self {
        self.marker = marker.map(str::to_string);
        self
    }

    pub fn html(&self) -> String {
        let pid = self
            .id
            .as_ref()
            .map(|id| format!(r#" data-pid="{id}""#))
            .unwrap_or_default();
        let href = self
            .href
            .as_ref()
            .map(|h| format!(r#" href="{h}""#))
            .unwrap_or_default();
        let time = self
            .datetime
            .as_ref()
            .map(|d| format!(r#"<time datetime="{d}">Jan 2</time> "#))
            .unwrap_or_default();
        let small = self
            .location
            .as_ref()
            .map(|l| format!("<small>{l}</small>"))
            .unwrap_or_default();
        let marker = self
            .marker
            .as_ref()
            .map(|m| format!(r#" <span class="px"><span class="p">{m}</span></span>"#))
            .unwrap_or_default();

        format!(
            r#"<p class="row"{pid}><span class="pl">{time}<a class="hdrlnk"{href}>{title}</a></span><span class="l2"><span class="pnr">{small}{marker}</span></span></p>"#,
            title = self.title,
        )
    }
}

pub fn listing_page(rows: &[Row]) -> String {
    let rows: String = rows.iter().map(Row::html).collect();
    format!(r#"<html><head><title>search</title></head><body><div class="content">{rows}</div></body></html>"#)
}

pub fn ad_page(body: &str) -> String {
    format!(r#"<html><body><section id="postingbody">{body}</section></body></html>"#)
}

pub fn test_config(offset_dir: &Path, use_stored_offset: bool) -> ClientConfig {
    ClientConfig {
        use_stored_offset,
        offset_dir: offset_dir.to_path_buf(),
        ..ClientConfig::default()
    }
}
