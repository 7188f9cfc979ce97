pub mod cards;
pub mod catalog;
pub mod config;
pub mod dom;
pub mod domain;
pub mod errors;
pub mod geos;
pub mod images;
pub mod logging;
pub mod ota;
pub mod page;
pub mod pagination;
pub mod runtime;
pub mod templates;

pub use config::PageConfig;
pub use domain::{FilterId, Listing};
pub use page::HotelsPage;

#[cfg(test)]
mod tests;
