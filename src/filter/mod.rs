use chrono::NaiveDate;

use crate::error::{Result, RssError};
use crate::models::Document;

/// Narrow `document` to the items published on `day` (UTC calendar day).
///
/// Items are only removed, never reordered. An item whose published date
/// does not parse fails the whole filter, and a day that matches nothing
/// fails with [`RssError::NoItemsForDate`] so the caller can report the
/// requested day rather than a generic failure.
pub fn filter_by_day(mut document: Document, day: NaiveDate) -> Result<Document> {
    let items = std::mem::take(&mut document.items);

    let mut matched = Vec::with_capacity(items.len());
    for item in items {
        if item.published_day()? == day {
            matched.push(item);
        }
    }

    if matched.is_empty() {
        return Err(RssError::NoItemsForDate { day });
    }

    document.items = matched;
    Ok(document)
}
