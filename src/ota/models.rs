use crate::domain::Location;
use serde::Deserialize;

// hotel_rates[]
//  └── hotel
//       ├── name
//       ├── location { lat, lng }
//       ├── low_rate          (number or numeric string)
//       ├── rating { total }
//       ├── star_rating       (hundredths-style, 40 => 4 stars)
//       ├── thumbnail_url_templates[] { src }   ("{size}" placeholder)
//       └── serp_filters[]

#[derive(Debug, Deserialize)]
pub struct RateFeed {
    pub hotel_rates: Vec<HotelRate>,
}

#[derive(Debug, Deserialize)]
pub struct HotelRate {
    pub hotel: Hotel,
}

#[derive(Debug, Deserialize)]
pub struct Hotel {
    pub name: String,
    pub location: Location,
    pub low_rate: RawNumber,
    pub rating: HotelRating,
    pub star_rating: f64,
    pub thumbnail_url_templates: Vec<Thumbnail>,
    pub serp_filters: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct HotelRating {
    pub total: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct Thumbnail {
    pub src: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    Number(f64),
    Text(String),
}

impl RawNumber {
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            RawNumber::Number(n) => *n,
            RawNumber::Text(s) => s.trim().parse().ok()?,
        };
        value.is_finite().then_some(value)
    }
}
