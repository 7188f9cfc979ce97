pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::{filter_bar, hotel_template};
pub use layouts::desktop::desktop_layout;
pub use pages::{hotels_document, hotels_page};
