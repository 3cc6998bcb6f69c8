use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::debug;

use crate::error::{Result, RssError};
use crate::models::Document;

/// File name of the cache slot inside the system temp directory.
pub static CACHE_FILE_NAME: &str = "rss-reader.cache";

/// A single-slot store for the most recently downloaded document, persisted
/// as one JSON blob. Every `store` fully replaces the previous content;
/// there is no history, no per-feed keying and no schema version marker.
///
/// The file is not locked: two invocations racing on the same slot can
/// produce a torn read. One process at a time is the intended usage.
#[derive(Debug, Clone)]
pub struct CacheStore {
    cache_file: PathBuf,
}

impl CacheStore {
    pub fn new(cache_file: PathBuf) -> CacheStore {
        CacheStore { cache_file }
    }

    /// The default slot, `<system temp dir>/rss-reader.cache`.
    pub fn default_path() -> PathBuf {
        std::env::temp_dir().join(CACHE_FILE_NAME)
    }

    /// Location of the slot this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.cache_file
    }

    /// Serialize `document` to the slot, overwriting whatever was there.
    /// The document is stored in full, before any limit or filter is
    /// applied.
    pub fn store(&self, document: &Document) -> Result<()> {
        debug!(cache_file = %self.cache_file.display(), "storing document to cache");
        self.write(document).map_err(|cause| RssError::CacheWriteFailed {
            path: self.cache_file.clone(),
            cause: cause.into(),
        })
    }

    fn write(&self, document: &Document) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(document)
            .context("Could not serialize document to json.")?;
        std::fs::write(&self.cache_file, json)
            .with_context(|| format!("Could not write cache file {}", self.cache_file.display()))?;
        Ok(())
    }

    /// Read the slot back into a [`Document`]. A missing or unreadable file,
    /// invalid JSON, or a JSON shape missing required fields are all
    /// unrecoverable read failures; there is no migration from older
    /// formats.
    pub fn load(&self) -> Result<Document> {
        debug!(cache_file = %self.cache_file.display(), "loading document from cache");
        self.read().map_err(|cause| RssError::CacheReadFailed {
            path: self.cache_file.clone(),
            cause: cause.into(),
        })
    }

    fn read(&self) -> anyhow::Result<Document> {
        let content = std::fs::read_to_string(&self.cache_file)
            .with_context(|| format!("Could not read cache file {}", self.cache_file.display()))?;
        serde_json::from_str(&content)
            .context("Cache content is not a valid document.")
    }
}
