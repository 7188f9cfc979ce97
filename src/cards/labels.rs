use crate::domain::Amenity;

/// Star count to class. 0 and 1 share the plain treatment.
pub const STARS_CLASS: [&str; 6] = [
    "hotel-stars",
    "hotel-stars",
    "hotel-stars-two",
    "hotel-stars-three",
    "hotel-stars-four",
    "hotel-stars-five",
];

pub const RATING_NONE_CLASS: &str = "hotel-rating-none";
pub const NO_PHOTO_CLASS: &str = "hotel-nophoto";
pub const AMENITY_CLASS: &str = "hotel-amenity";

pub fn stars_class(stars: u8) -> &'static str {
    STARS_CLASS
        .get(usize::from(stars))
        .copied()
        .unwrap_or(STARS_CLASS[0])
}

/// Class for the floored rating; unmapped buckets get the "none" look.
pub fn rating_class(rating: f64) -> &'static str {
    match rating.floor() as i64 {
        4 => "hotel-rating-four",
        5 => "hotel-rating-five",
        6 => "hotel-rating-six",
        7 => "hotel-rating-seven",
        8 => "hotel-rating-eight",
        _ => RATING_NONE_CLASS,
    }
}

pub fn amenity_class(amenity: Amenity) -> &'static str {
    match amenity {
        Amenity::Breakfast => "hotel-amenity-breakfast",
        Amenity::Parking => "hotel-amenity-parking",
        Amenity::Wifi => "hotel-amenity-wifi",
    }
}

pub fn amenity_label(amenity: Amenity) -> &'static str {
    match amenity {
        Amenity::Breakfast => "Завтрак",
        Amenity::Parking => "Парковка",
        Amenity::Wifi => "WiFi",
    }
}
