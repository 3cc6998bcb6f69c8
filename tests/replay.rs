use test_utils::*;

use rss_reader::filter::filter_by_day;
use rss_reader::{Document, RssError, RssReader};

#[test]
fn replay_returns_items_published_on_the_requested_day() {
    let (_dir, cache) = temp_cache();
    cache.store(&example_document()).unwrap();

    let mut config = base_config(cache.path().to_path_buf());
    config.date = Some(day(2022, 1, 1));

    let document = RssReader::new(config).load().unwrap();
    assert_eq!(document.items, vec![example_item("title1", "link1", "2022-01-01T01:02:03Z")]);
}

#[test]
fn replay_applies_limit_after_filtering() {
    let (_dir, cache) = temp_cache();
    let published_date = "2022-01-01T01:02:03Z";
    cache.store(&Document {
        title: "title".into(),
        updated: "updated".into(),
        items: vec![
            example_item("title1", "link1", published_date),
            example_item("title2", "link2", published_date),
        ],
    }).unwrap();

    let mut config = base_config(cache.path().to_path_buf());
    config.date = Some(day(2022, 1, 1));
    config.limit = Some(1);

    let document = RssReader::new(config).load().unwrap();
    assert_eq!(document.items, vec![example_item("title1", "link1", published_date)]);
}

#[test]
fn replay_fails_when_no_items_match_the_day() {
    let (_dir, cache) = temp_cache();
    cache.store(&Document {
        title: "title".into(),
        updated: "updated".into(),
        items: vec![
            example_item("title1", "link1", "2022-01-01T01:02:03Z"),
            example_item("title2", "link2", "2022-01-01T01:02:03Z"),
        ],
    }).unwrap();

    let mut config = base_config(cache.path().to_path_buf());
    config.date = Some(day(2030, 1, 1));

    let res = RssReader::new(config).load();
    assert!(res.is_err(), "replay found items for a day with none");

    let err = res.unwrap_err();
    assert!(matches!(err, RssError::NoItemsForDate { .. }), "wrong error kind: {:?}", err);
    assert!(err.to_string().contains("20300101"),
            "error message did not name the requested day: {}", err);
}

#[test]
fn replay_fails_when_cache_is_empty() {
    let (_dir, cache) = temp_cache();

    let mut config = base_config(cache.path().to_path_buf());
    config.date = Some(day(2022, 1, 1));

    let err = RssReader::new(config).load().unwrap_err();
    assert!(matches!(err, RssError::CacheReadFailed { .. }), "wrong error kind: {:?}", err);
}

#[test]
fn filter_keeps_every_match_in_feed_order() {
    let document = Document {
        title: "title".into(),
        updated: "updated".into(),
        items: vec![
            example_item("early", "link1", "2022-01-01T00:00:01Z"),
            example_item("other day", "link2", "2022-01-02T00:00:00Z"),
            example_item("late", "link3", "2022-01-01T23:59:59Z"),
        ],
    };

    let filtered = filter_by_day(document, day(2022, 1, 1)).unwrap();
    let titles: Vec<&str> = filtered.items.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, vec!["early", "late"]);
}

#[test]
fn filter_leaves_title_and_updated_untouched() {
    let filtered = filter_by_day(example_document(), day(2022, 1, 1)).unwrap();
    assert_eq!(filtered.title, "title");
    assert_eq!(filtered.updated, "updated");
}

#[test]
fn filter_fails_on_malformed_cached_timestamp() {
    let document = Document {
        title: "title".into(),
        updated: "updated".into(),
        items: vec![example_item("bad", "link", "1.1.2000")],
    };

    let err = filter_by_day(document, day(2022, 1, 1)).unwrap_err();
    assert!(matches!(err, RssError::MalformedTimestamp { .. }), "wrong error kind: {:?}", err);
}

#[test]
fn limit_is_prefix_preserving() {
    let (_dir, cache) = temp_cache();
    let published_date = "2022-01-01T01:02:03Z";
    cache.store(&Document {
        title: "title".into(),
        updated: "updated".into(),
        items: vec![
            example_item("title1", "link1", published_date),
            example_item("title2", "link2", published_date),
            example_item("title3", "link3", published_date),
        ],
    }).unwrap();

    let mut config = base_config(cache.path().to_path_buf());
    config.date = Some(day(2022, 1, 1));
    config.limit = Some(2);

    let document = RssReader::new(config).load().unwrap();
    let titles: Vec<&str> = document.items.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, vec!["title1", "title2"]);
}

#[test]
fn limit_larger_than_item_count_is_a_noop() {
    let (_dir, cache) = temp_cache();
    cache.store(&example_document()).unwrap();

    let mut config = base_config(cache.path().to_path_buf());
    config.date = Some(day(2022, 1, 1));
    config.limit = Some(100_000);

    let document = RssReader::new(config).load().unwrap();
    assert_eq!(document.items.len(), 1);
}
