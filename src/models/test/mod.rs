use crate::models::{Document, Item};
use crate::RssError;

use chrono::NaiveDate;

fn item(published_date: &str) -> Item {
    Item {
        title: "item title".into(),
        link: "http://link".into(),
        published_date: published_date.into(),
        image_link: None,
    }
}

#[test]
fn published_day_truncates_to_midnight_utc() {
    let day = item("2022-01-01T01:02:03Z").published_day();
    assert!(day.is_ok(), "published_day failed: {:?}", day.unwrap_err());
    assert_eq!(day.unwrap(), NaiveDate::from_ymd_opt(2022, 1, 1).unwrap());
}

#[test]
fn published_day_at_exact_midnight() {
    let day = item("2030-01-01T00:00:00Z").published_day().unwrap();
    assert_eq!(day, NaiveDate::from_ymd_opt(2030, 1, 1).unwrap());
}

#[test]
fn published_day_fails_on_non_iso_date() {
    let res = item("1.1.2000").published_day();
    assert!(res.is_err(), "published_day accepted a non-iso date");

    let err = res.unwrap_err();
    assert!(matches!(err, RssError::MalformedTimestamp { .. }),
            "wrong error kind: {:?}", err);
    assert!(err.to_string().contains("1.1.2000"),
            "error message did not name the bad value: {}", err);
}

#[test]
fn published_day_fails_on_rfc2822_date() {
    let res = item("Sat, 01 Jan 2022 01:02:03 GMT").published_day();
    assert!(res.is_err(), "published_day accepted an rfc2822 date");
}

#[test]
fn document_serializes_with_fixed_field_order() {
    let document = Document {
        title: "title".into(),
        updated: "1.1.2022".into(),
        items: vec![item("1.1.2000")],
    };

    let json = serde_json::to_string(&document).unwrap();
    let title_pos = json.find("\"title\"").unwrap();
    let updated_pos = json.find("\"updated\"").unwrap();
    let items_pos = json.find("\"items\"").unwrap();
    assert!(title_pos < updated_pos && updated_pos < items_pos,
            "field order is not title/updated/items: {}", json);
    assert!(json.contains("\"image_link\":null"),
            "absent image link did not serialize as null: {}", json);
}
