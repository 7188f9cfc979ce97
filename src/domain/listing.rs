// src/domain/listing.rs

use serde::{Deserialize, Serialize};

/// One hotel record as shipped in `hotels.json`.
/// Immutable after load; every derived view works on copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub name: String,
    pub location: Location,
    /// Distance-from-centre bucket, already scaled down by the producer.
    pub distance: f64,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    pub stars: u8,
    /// Raw amenity ids. Ids outside the known vocabulary are skipped when rendering.
    #[serde(default)]
    pub amenities: Vec<String>,
    pub preview: String,
    #[serde(default)]
    pub pictures: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

/// Closed amenity vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Amenity {
    Breakfast,
    Parking,
    Wifi,
}

impl Amenity {
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "breakfast" => Some(Amenity::Breakfast),
            "parking" => Some(Amenity::Parking),
            "wifi" => Some(Amenity::Wifi),
            _ => None,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Amenity::Breakfast => "breakfast",
            Amenity::Parking => "parking",
            Amenity::Wifi => "wifi",
        }
    }
}

impl Listing {
    /// Known amenities in listing order; unknown ids are dropped.
    pub fn known_amenities(&self) -> impl Iterator<Item = Amenity> + '_ {
        self.amenities.iter().filter_map(|id| Amenity::from_id(id))
    }
}
