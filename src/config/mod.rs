use std::path::PathBuf;

use chrono::NaiveDate;

/// A validated run configuration, produced by the cli layer. By the time a
/// [`crate::RssReader`] sees one of these, at least one of `url`/`date` is
/// present and `limit` is positive; the core performs no argument
/// validation of its own.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Feed url to fetch. When present, the run fetches and caches;
    /// otherwise it replays from the cache using `date`.
    pub url: Option<String>,
    /// Keep only the first N items of the final document.
    pub limit: Option<usize>,
    /// Calendar day to replay from the cache.
    pub date: Option<NaiveDate>,
    /// Render the primary output as json instead of text.
    pub json: bool,
    /// Paths to write the html rendition to. May be empty.
    pub html: Vec<PathBuf>,
    /// Location of the cache slot. Injected so tests can point each run at
    /// its own temp directory.
    pub cache_path: PathBuf,
}
