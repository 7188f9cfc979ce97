pub mod filters;
pub mod listing;

pub use filters::{apply, FilterId, FILTER_CONTROLS};
pub use listing::{Amenity, Listing, Location};
