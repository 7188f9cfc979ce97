use crate::domain::{FilterId, Listing};

/// Full unfiltered listing set plus the active filter. Pure state.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    all: Vec<Listing>,
    active: FilterId,
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self {
            all: Vec::new(),
            active: FilterId::ShowAll,
        }
    }
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole set and goes back to `ShowAll`.
    pub fn load(&mut self, listings: Vec<Listing>) {
        self.all = listings;
        self.active = FilterId::ShowAll;
    }

    pub fn all(&self) -> &[Listing] {
        &self.all
    }

    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    pub fn active_filter(&self) -> FilterId {
        self.active
    }

    pub fn set_active_filter(&mut self, filter: FilterId) {
        self.active = filter;
    }
}
