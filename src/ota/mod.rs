pub mod models;
mod normalize;

pub use normalize::{
    map_amenities, normalize_feed, normalize_file, normalize_hotel, AMENITIES_MAP, PICTURE_SIZE,
    PREVIEW_SIZE,
};
