//! Serde tests for the JSON shape of core types.

use serde_json::json;

use crate::{AppId, GameFields, GameRecord, GamesQuery, GamesResponse, Price};

fn hades() -> GameRecord {
    GameRecord::new(
        AppId::new(1_145_360).unwrap(),
        GameFields {
            name: Some("Hades".to_string()),
            release_date: Some("17 Sep, 2020".to_string()),
            price: Some(Price::amount(24.5, "EUR")),
            review_score: Some(93),
        },
    )
}

// ============================================================================
// GameRecord
// ============================================================================

#[test]
fn test_record_serializes_camel_case() {
    let value = serde_json::to_value(hades()).unwrap();
    assert_eq!(
        value,
        json!({
            "id": 1_145_360,
            "name": "Hades",
            "releaseDate": "17 Sep, 2020",
            "price": "24.50 EUR",
            "reviewScore": 93,
            "url": "https://store.steampowered.com/app/1145360"
        })
    );
}

#[test]
fn test_absent_fields_serialize_as_null() {
    let record = GameRecord::empty(AppId::new(570).unwrap());
    let value = serde_json::to_value(&record).unwrap();
    assert!(value["name"].is_null());
    assert!(value["releaseDate"].is_null());
    assert!(value["price"].is_null());
    assert!(value["reviewScore"].is_null());
    assert_eq!(value["url"], "https://store.steampowered.com/app/570");
}

#[test]
fn test_record_deserializes() {
    let json = r#"{
        "id": 570,
        "name": "Dota 2",
        "releaseDate": "9 Jul, 2013",
        "price": "Free To Play",
        "reviewScore": null,
        "url": "https://store.steampowered.com/app/570"
    }"#;
    let record: GameRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.name(), Some("Dota 2"));
    assert_eq!(record.price(), Some(&Price::FreeToPlay));
    assert!(record.review_score().is_none());
}

#[test]
fn test_zero_id_rejected() {
    let json = r#"{"id": 0, "name": null, "releaseDate": null, "price": null,
        "reviewScore": null, "url": "x"}"#;
    assert!(serde_json::from_str::<GameRecord>(json).is_err());
}

// ============================================================================
// GamesResponse
// ============================================================================

#[test]
fn test_response_shape() {
    let query = GamesQuery::new(1).with_concurrency(5);
    let response = GamesResponse::new(&query, 0.512, vec![hades()]);
    let value = serde_json::to_value(&response).unwrap();

    assert_eq!(value["rows"], 1);
    assert_eq!(value["parallel"], true);
    assert_eq!(value["concurrency"], 5);
    assert_eq!(value["elapsed"], 0.512);
    assert_eq!(value["data"][0]["name"], "Hades");
}
