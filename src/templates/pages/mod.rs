pub mod home;

pub use home::{hotels_document, hotels_page};
