// src/ota/normalize.rs

use crate::domain::Listing;
use crate::errors::NormalizeError;
use crate::geos::distance_bucket;
use crate::ota::models::{Hotel, RateFeed};
use std::path::Path;

pub const SIZE_TOKEN: &str = "{size}";
pub const PREVIEW_SIZE: &str = "120x120";
pub const PICTURE_SIZE: &str = "x500";

/// OTA `serp_filters` names to our amenity ids. Anything else is dropped.
pub const AMENITIES_MAP: [(&str, &str); 4] = [
    ("has_breakfast", "breakfast"),
    ("has_internet", "wifi"),
    ("has_meal", "breakfast"),
    ("has_parking", "parking"),
];

pub fn normalize_file(path: &Path) -> Result<Vec<Listing>, NormalizeError> {
    let raw = std::fs::read_to_string(path)?;
    normalize_feed(&raw)
}

/// All or nothing: the first bad hotel fails the whole feed.
pub fn normalize_feed(raw: &str) -> Result<Vec<Listing>, NormalizeError> {
    let feed: RateFeed = serde_json::from_str(raw)?;

    feed.hotel_rates
        .iter()
        .enumerate()
        .map(|(index, rate)| normalize_hotel(index, &rate.hotel))
        .collect()
}

pub fn normalize_hotel(index: usize, hotel: &Hotel) -> Result<Listing, NormalizeError> {
    let price = hotel
        .low_rate
        .as_f64()
        .filter(|price| *price >= 0.0)
        .ok_or_else(|| NormalizeError::InvalidField {
            index,
            field: "low_rate",
            reason: format!("{:?} is not a non-negative number", hotel.low_rate),
        })?;

    let stars = (hotel.star_rating / 10.0).floor();
    if !(0.0..=5.0).contains(&stars) {
        return Err(NormalizeError::InvalidField {
            index,
            field: "star_rating",
            reason: format!("{} is outside 0..=50", hotel.star_rating),
        });
    }

    let first = hotel
        .thumbnail_url_templates
        .first()
        .ok_or(NormalizeError::MissingField {
            index,
            field: "thumbnail_url_templates[0]",
        })?;

    Ok(Listing {
        name: hotel.name.clone(),
        location: hotel.location,
        distance: distance_bucket(hotel.location),
        price,
        rating: hotel.rating.total,
        stars: stars as u8,
        amenities: map_amenities(&hotel.serp_filters),
        preview: first.src.replace(SIZE_TOKEN, PREVIEW_SIZE),
        pictures: hotel
            .thumbnail_url_templates
            .iter()
            .map(|t| t.src.replace(SIZE_TOKEN, PICTURE_SIZE))
            .collect(),
    })
}

/// Translated, first occurrence wins, no duplicates.
pub fn map_amenities(serp_filters: &[String]) -> Vec<String> {
    let mut amenities: Vec<String> = Vec::new();

    for filter in serp_filters {
        let Some((_, amenity)) = AMENITIES_MAP
            .iter()
            .find(|(raw, _)| *raw == filter.as_str())
        else {
            continue;
        };
        if !amenities.iter().any(|a| a == amenity) {
            amenities.push(amenity.to_string());
        }
    }

    amenities
}
