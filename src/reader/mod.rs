use std::path::PathBuf;

use tracing::{debug, error};

use crate::cache::CacheStore;
use crate::config::RunConfig;
use crate::downloader;
use crate::error::{Result, RssError};
use crate::filter;
use crate::formatters::{HtmlFormatter, JsonFormatter, RssFormatter, TextFormatter};
use crate::models::Document;

/// One run of the fetch → parse → cache → filter → format pipeline,
/// constructed from a validated [`RunConfig`]. The cache location is an
/// explicit field rather than a global so separate runs (and tests) can't
/// leak state into each other.
pub struct RssReader {
    config: RunConfig,
    cache: CacheStore,
}

impl RssReader {
    pub fn new(config: RunConfig) -> RssReader {
        let cache = CacheStore::new(config.cache_path.clone());
        RssReader { config, cache }
    }

    /// Produce the run's document: fetch-and-cache when a url is
    /// configured, replay-and-filter from the cache otherwise. The
    /// configured limit is applied last, after any filtering.
    ///
    /// The document is cached in full; the limit only truncates the copy
    /// handed onward.
    pub fn load(&self) -> Result<Document> {
        let mut document = match (&self.config.url, self.config.date) {
            (Some(url), _) => {
                let document = downloader::download(url)?;
                self.cache.store(&document)?;
                document
            }
            (None, Some(day)) => {
                let document = self.cache.load()?;
                filter::filter_by_day(document, day)?
            }
            // The cli layer rejects configurations with neither.
            (None, None) => unreachable!("run configuration has neither url nor date"),
        };

        if let Some(limit) = self.config.limit {
            document.items.truncate(limit);
        }

        Ok(document)
    }

    /// Render the primary output: json when configured, text otherwise.
    pub fn format_output(&self, document: &Document) -> String {
        let formatter: &dyn RssFormatter = if self.config.json {
            &JsonFormatter
        } else {
            &TextFormatter
        };
        formatter.format(document)
    }

    /// Write the html rendition to every configured output path. Paths are
    /// attempted independently and in order; a failed write doesn't stop
    /// the remaining ones. When any path failed, all failures are returned
    /// together as one [`RssError::FileGenerationFailed`] after the loop.
    /// Files that were written stay written.
    pub fn generate_files(&self, document: &Document) -> Result<Vec<PathBuf>> {
        if self.config.html.is_empty() {
            return Ok(Vec::new());
        }

        let html = HtmlFormatter.format(document);
        let mut generated = Vec::new();
        let mut failures = Vec::new();
        for path in &self.config.html {
            match std::fs::write(path, &html) {
                Ok(()) => {
                    debug!(file = %path.display(), "file was generated");
                    generated.push(path.clone());
                }
                Err(err) => {
                    error!(file = %path.display(), %err, "failed to generate file");
                    failures.push((path.clone(), err));
                }
            }
        }

        if !failures.is_empty() {
            return Err(RssError::FileGenerationFailed { failures });
        }
        Ok(generated)
    }

    /// Load, print the primary output to stdout, then write any configured
    /// html files. A file-generation failure is reported only after the
    /// primary output has already been printed.
    pub fn run(&self) -> Result<()> {
        let document = self.load()?;
        println!("{}", self.format_output(&document));
        self.generate_files(&document)?;
        Ok(())
    }
}
