use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use structopt::StructOpt;

use std::path::PathBuf;

use crate::cache::CacheStore;
use crate::config::RunConfig;

static DATE_FORMAT: &str = "YYYYMMDD";

#[derive(Debug, StructOpt)]
#[structopt(name = "rss-reader", about = "Command-line RSS reader.")]
pub struct RssReaderArgs {
    /// RSS url to be used
    pub url: Option<String>,

    /// Limit news topics if this parameter is provided
    // hyphen values allowed so a negative limit reaches validation (exit
    // code 3) instead of being a parse error
    #[structopt(long = "limit", value_name = "LIMIT", allow_hyphen_values = true)]
    pub limit: Option<i64>,

    /// Show feeds from local cache published on this date, in YYYYMMDD format
    #[structopt(long = "date", value_name = "DATE")]
    pub date: Option<String>,

    /// Print result as JSON in stdout
    #[structopt(long = "json")]
    pub json: bool,

    /// Format results as html file FILE. Can be specified multiple times
    #[structopt(long = "to-html", value_name = "FILE", number_of_values = 1)]
    pub html: Vec<PathBuf>,

    /// Output verbose status messages
    #[structopt(long = "verbose")]
    pub verbose: bool,
}

impl RssReaderArgs {
    /// Validate the parsed arguments into a [`RunConfig`] for the core. An
    /// error here is a validation failure (exit code 3), distinct from an
    /// argument parse failure (exit code 2).
    pub fn into_config(self) -> Result<RunConfig> {
        let date = match &self.date {
            Some(raw) => Some(parse_date_arg(raw)?),
            None => None,
        };

        if self.url.is_none() && date.is_none() {
            bail!("Argument 'url' should be present");
        }

        let limit = match self.limit {
            Some(limit) if limit <= 0 => {
                bail!("Argument 'limit' should be positive number, when specified")
            }
            Some(limit) => Some(limit as usize),
            None => None,
        };

        Ok(RunConfig {
            url: self.url,
            limit,
            date,
            json: self.json,
            html: self.html,
            cache_path: CacheStore::default_path(),
        })
    }
}

fn parse_date_arg(raw: &str) -> Result<NaiveDate> {
    if raw.len() != DATE_FORMAT.len() || !raw.chars().all(|c| c.is_ascii_digit()) {
        bail!("Argument 'date' should have format {}, when specified", DATE_FORMAT);
    }
    NaiveDate::parse_from_str(raw, "%Y%m%d")
        .with_context(|| format!("Argument 'date' value {} is not a valid calendar date", raw))
}
