use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

// row
//  ├── data-pid            -> id
//  ├── .pl
//  │    ├── time[datetime] -> post_date
//  │    └── .hdrlnk        -> title, url
//  └── .l2 .pnr
//       ├── small          -> location
//       └── .px .p         -> has_image

/// One row of a search results page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingRecord {
    pub id: i64,
    pub title: String,
    pub location: String,
    pub url: String,
    /// Raw `datetime` attribute, kept as the site wrote it.
    pub post_date: String,
    pub has_image: bool,
}

impl ListingRecord {
    /// Best-effort parse of `post_date`. Listing pages use `2016-01-02 13:45`;
    /// anything else is tried as RFC 3339.
    pub fn posted_at(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.post_date, "%Y-%m-%d %H:%M")
            .ok()
            .or_else(|| {
                DateTime::parse_from_rfc3339(&self.post_date)
                    .ok()
                    .map(|dt| dt.naive_utc())
            })
    }
}

/// Records accepted by one extraction pass, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListingBatch {
    pub records: Vec<ListingRecord>,
}

impl ListingBatch {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn ids(&self) -> Vec<i64> {
        self.records.iter().map(|r| r.id).collect()
    }
}

impl IntoIterator for ListingBatch {
    type Item = ListingRecord;
    type IntoIter = std::vec::IntoIter<ListingRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}
