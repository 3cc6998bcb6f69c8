use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{Result, RssError};

/// The format every item's published date must conform to. Dates are kept as
/// the raw feed strings end to end; this format is only consulted when a
/// calendar day has to be computed.
pub const UTC_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// A single entry of a feed. Immutable once constructed.
///
/// The field order fixes the cache's JSON shape, so don't reorder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub title: String,
    // We don't need to parse it into an actual URL since we don't ever fetch the resource.
    pub link: String,
    /// ISO-8601 UTC timestamp, `YYYY-MM-DDTHH:MM:SSZ`.
    pub published_date: String,
    /// URL of the entry's media enclosure, if the feed supplied one.
    pub image_link: Option<String>,
}

impl Item {
    /// The item's published date truncated to its calendar day (midnight
    /// UTC). Fails if `published_date` is not a well-formed UTC timestamp;
    /// callers must treat that as fatal for the operation containing this
    /// item.
    pub fn published_day(&self) -> Result<NaiveDate> {
        NaiveDateTime::parse_from_str(&self.published_date, UTC_TIMESTAMP_FORMAT)
            .map(|timestamp| timestamp.date())
            .map_err(|cause| RssError::MalformedTimestamp {
                value: self.published_date.clone(),
                cause,
            })
    }
}

/// A normalized feed document. Created once per run, either by the
/// downloader or by the cache store; the only mutation afterwards is
/// truncation (limit) or filtering (date), never reordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    /// The feed's "last updated" string, kept verbatim and never reparsed.
    pub updated: String,
    /// Items in the feed's native order.
    pub items: Vec<Item>,
}
