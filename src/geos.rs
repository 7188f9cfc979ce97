use crate::domain::Location;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// City centre the distance buckets are measured from.
pub const CITY_CENTRE: Location = Location {
    lat: 35.41,
    lng: 139.36,
};

/// Great-circle distance in kilometres (haversine).
pub fn distance_km(from: Location, to: Location) -> f64 {
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lng = (to.lng - from.lng).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + from.lat.to_radians().cos() * to.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Distance from the centre divided by 10, rounded to one decimal.
pub fn distance_bucket(location: Location) -> f64 {
    let scaled = distance_km(location, CITY_CENTRE) / 10.0;
    (scaled * 10.0).round() / 10.0
}
