use anyhow::{anyhow, Context};
use reqwest::blocking::Client;
use rss::Channel;
use tracing::debug;
use url::Url;

use crate::error::{Result, RssError};
use crate::models::{Document, Item};

static RSS_READER_USER_AGENT: &str = concat!(
    env!("CARGO_PKG_NAME"),
    "/",
    env!("CARGO_PKG_VERSION"),
);

/// Download the feed at `url` and parse it into a normalized [`Document`].
///
/// A single attempt: there is no retry or backoff around transient network
/// failures, and no timeout beyond the transport default. Any failure along
/// the way (transport, feed syntax, an entry with missing or unparseable
/// required fields) fails the whole download; a partially populated document
/// is never returned.
pub fn download(url: &str) -> Result<Document> {
    fetch_and_parse(url).map_err(|cause| RssError::FetchFailed {
        url: url.to_string(),
        cause: cause.into(),
    })
}

fn fetch_and_parse(url: &str) -> anyhow::Result<Document> {
    let feed_url = Url::parse(url)
        .with_context(|| format!("Invalid feed url {}", url))?;

    let client = Client::builder()
        .user_agent(RSS_READER_USER_AGENT)
        .build().unwrap();

    let response = client.get(feed_url).send()
        .with_context(|| format!("Failed to download rss feed from url {}", url))?
        .bytes()
        .with_context(|| format!("Failed to download rss feed from url {}", url))?;

    // A body that isn't well-formed feed syntax is the "bozo" condition.
    let channel = Channel::read_from(&response[..])
        .with_context(|| format!("Could not parse rss feed from url {}", url))?;

    let document = parse_channel(&channel)?;
    debug!(title = %document.title, items = document.items.len(), "parsed rss document");
    Ok(document)
}

fn parse_channel(channel: &Channel) -> anyhow::Result<Document> {
    let updated = channel.last_build_date()
        .ok_or_else(|| anyhow!("Channel last build date is missing."))?;

    let items = channel.items().iter()
        .map(parse_item)
        .collect::<anyhow::Result<Vec<Item>>>()?;

    Ok(Document {
        title: channel.title().to_string(),
        updated: updated.to_string(),
        items,
    })
}

fn parse_item(entry: &rss::Item) -> anyhow::Result<Item> {
    let title = entry.title()
        .ok_or_else(|| anyhow!("Entry title is missing."))?;
    let link = entry.link()
        .ok_or_else(|| anyhow!("Entry link is missing."))?;
    let published_date = entry.pub_date()
        .ok_or_else(|| anyhow!("Entry pub date is missing."))?;

    let item = Item {
        title: title.to_string(),
        link: link.to_string(),
        published_date: published_date.to_string(),
        image_link: image_link(entry),
    };

    // The published date must truncate to a calendar day; an entry that
    // doesn't parse fails the whole feed.
    item.published_day()
        .context("Entry pub date did not parse correctly.")?;

    debug!(title = %item.title, "parsed rss item");
    Ok(item)
}

/// The entry's media enclosure URL, if any. Checks the `media:content`
/// extension first, then a plain rss enclosure. Absence is not an error.
fn image_link(entry: &rss::Item) -> Option<String> {
    let media_content = entry.extensions()
        .get("media")
        .and_then(|media| media.get("content"))
        .and_then(|contents| contents.first())
        .and_then(|content| content.attrs().get("url"));

    match media_content {
        Some(media_url) => Some(media_url.clone()),
        None => entry.enclosure().map(|enclosure| enclosure.url().to_string()),
    }
}
