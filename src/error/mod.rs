use std::io;
use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::UTC_TIMESTAMP_FORMAT;

pub type Result<T> = std::result::Result<T, RssError>;

/// Causes are heterogeneous (transport, feed syntax, io, json, chrono) so
/// they're carried behind a boxed error trait object.
type Cause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Every failure the core pipeline can produce. Each variant wraps its
/// underlying cause where one exists; `main` prints the whole chain once at
/// the top of the run.
#[derive(Debug, Error)]
pub enum RssError {
    /// Network/transport failure, a feed that is not well-formed rss, or an
    /// entry with missing or unparseable required fields.
    #[error("Failed to download url / parse document from {url}")]
    FetchFailed {
        url: String,
        #[source]
        cause: Cause,
    },

    #[error("Failed to save cache to {}", .path.display())]
    CacheWriteFailed {
        path: PathBuf,
        #[source]
        cause: Cause,
    },

    #[error("Failed to load cache from {}", .path.display())]
    CacheReadFailed {
        path: PathBuf,
        #[source]
        cause: Cause,
    },

    /// An item's published date is not a `YYYY-MM-DDTHH:MM:SSZ` UTC
    /// timestamp. Unrecoverable for whatever operation contained the item.
    #[error("Published date {value:?} does not match {}", UTC_TIMESTAMP_FORMAT)]
    MalformedTimestamp {
        value: String,
        #[source]
        cause: chrono::ParseError,
    },

    /// The replay filter matched nothing. Distinct from the cache errors so
    /// the user sees the requested day rather than an io failure.
    #[error("No RSS item was found with published date {}", .day.format("%Y%m%d"))]
    NoItemsForDate { day: NaiveDate },

    /// One or more html output paths could not be written. Collected after
    /// every path has been attempted; files that did get written remain.
    #[error("Failed to generate files: {}", describe_failures(.failures))]
    FileGenerationFailed { failures: Vec<(PathBuf, io::Error)> },
}

fn describe_failures(failures: &[(PathBuf, io::Error)]) -> String {
    failures
        .iter()
        .map(|(path, err)| format!("{} ({})", path.display(), err))
        .collect::<Vec<_>>()
        .join(", ")
}
