use crate::domain::Location;
use crate::errors::NormalizeError;
use crate::geos::{distance_bucket, distance_km, CITY_CENTRE};
use crate::ota::{map_amenities, normalize_feed, normalize_file};
use serde_json::json;
use std::io::Write;

fn hotel(overrides: serde_json::Value) -> serde_json::Value {
    let mut hotel = json!({
        "name": "Shinjuku Prince",
        "location": { "lat": 35.41, "lng": 139.36 },
        "low_rate": 7450,
        "rating": { "total": 8.2 },
        "star_rating": 40,
        "thumbnail_url_templates": [
            { "src": "https://cdn.test/{size}/a.jpg" },
            { "src": "https://cdn.test/{size}/b.jpg" }
        ],
        "serp_filters": ["has_internet"]
    });
    if let (Some(base), Some(extra)) = (hotel.as_object_mut(), overrides.as_object()) {
        for (key, value) in extra {
            base.insert(key.clone(), value.clone());
        }
    }
    hotel
}

fn feed(hotels: Vec<serde_json::Value>) -> String {
    let rates: Vec<_> = hotels.into_iter().map(|h| json!({ "hotel": h })).collect();
    json!({ "hotel_rates": rates }).to_string()
}

#[test]
fn hotel_at_the_centre_has_zero_distance() {
    let hotels = normalize_feed(&feed(vec![hotel(json!({}))])).unwrap();
    assert_eq!(hotels[0].distance, 0.0);
}

#[test]
fn distance_is_km_over_ten_to_one_decimal() {
    // 0.9 degrees of latitude is just over 100 km.
    let north = Location {
        lat: CITY_CENTRE.lat + 0.9,
        lng: CITY_CENTRE.lng,
    };
    let km = distance_km(CITY_CENTRE, north);
    assert!((km - 100.08).abs() < 0.05, "{km}");
    assert_eq!(distance_bucket(north), 10.0);
}

#[test]
fn hotel_fields_are_normalized() {
    let raw = feed(vec![hotel(json!({
        "low_rate": "3500.50",
        "star_rating": 45,
    }))]);

    let hotels = normalize_feed(&raw).unwrap();
    let h = &hotels[0];

    assert_eq!(h.name, "Shinjuku Prince");
    assert_eq!(h.price, 3500.5);
    assert_eq!(h.stars, 4);
    assert_eq!(h.rating, Some(8.2));
    assert_eq!(h.preview, "https://cdn.test/120x120/a.jpg");
    assert_eq!(
        h.pictures,
        vec!["https://cdn.test/x500/a.jpg", "https://cdn.test/x500/b.jpg"]
    );
}

#[test]
fn amenities_are_translated_and_deduplicated() {
    let filters: Vec<String> = ["has_meal", "has_pool", "has_breakfast", "has_parking", "has_internet"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    assert_eq!(map_amenities(&filters), vec!["breakfast", "parking", "wifi"]);
}

#[test]
fn output_keeps_the_catalog_contract() {
    let hotels = normalize_feed(&feed(vec![hotel(json!({}))])).unwrap();
    let value = serde_json::to_value(&hotels).unwrap();
    let first = &value[0];

    for key in ["name", "location", "distance", "price", "rating", "stars", "amenities", "preview", "pictures"] {
        assert!(first.get(key).is_some(), "missing {key}");
    }
    assert_eq!(first["amenities"], json!(["wifi"]));
}

#[test]
fn missing_required_field_fails_the_whole_feed() {
    let mut broken = hotel(json!({}));
    broken.as_object_mut().unwrap().remove("serp_filters");

    let result = normalize_feed(&feed(vec![hotel(json!({})), broken]));

    assert!(matches!(result, Err(NormalizeError::Json(_))));
}

#[test]
fn hotel_without_thumbnails_is_rejected() {
    let result = normalize_feed(&feed(vec![hotel(json!({ "thumbnail_url_templates": [] }))]));

    assert!(matches!(
        result,
        Err(NormalizeError::MissingField { index: 0, .. })
    ));
}

#[test]
fn unparsable_price_and_star_rating_are_rejected() {
    let bad_price = normalize_feed(&feed(vec![hotel(json!({ "low_rate": "call us" }))]));
    assert!(matches!(
        bad_price,
        Err(NormalizeError::InvalidField { field: "low_rate", .. })
    ));

    let bad_stars = normalize_feed(&feed(vec![hotel(json!({ "star_rating": 70 }))]));
    assert!(matches!(
        bad_stars,
        Err(NormalizeError::InvalidField { field: "star_rating", .. })
    ));
}

#[test]
fn invalid_json_and_missing_files_are_errors() {
    assert!(matches!(normalize_feed("{ not json"), Err(NormalizeError::Json(_))));

    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.json");
    assert!(matches!(normalize_file(&missing), Err(NormalizeError::Io(_))));
}

#[test]
fn feed_file_is_read_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(feed(vec![hotel(json!({})), hotel(json!({ "name": "Keio Plaza" }))]).as_bytes())
        .unwrap();

    let hotels = normalize_file(file.path()).unwrap();

    let names: Vec<_> = hotels.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(names, vec!["Shinjuku Prince", "Keio Plaza"]);
}
