mod loader;
mod store;

pub use loader::{fetch_listings, CatalogClient, CatalogSource};
pub use store::CatalogStore;
