//! Page controller: wires the catalog, filters, paging and cards to the document.

use crate::cards::{Card, CardRenderer};
use crate::catalog::{fetch_listings, CatalogSource, CatalogStore};
use crate::config::PageConfig;
use crate::dom::{Element, NodeRef};
use crate::domain::{self, FilterId, Listing};
use crate::errors::CatalogError;
use crate::images::ImageLoader;
use crate::pagination::{Pagination, ScrollSample};
use crate::runtime::{Debounce, Scheduler};
use crate::templates::components::{FILTER_CLASS, FILTER_SELECTED_CLASS};
use crate::templates::{hotels_document, hotels_page};
use std::cell::RefCell;
use std::ops::Range;
use std::rc::Rc;

struct PageState {
    catalog_url: String,
    missing_rating: f64,
    document: NodeRef,
    list: NodeRef,
    counter: NodeRef,
    store: CatalogStore,
    ordered: Vec<Listing>,
    pagination: Pagination,
    renderer: CardRenderer,
    cards: Vec<Card>,
}

/// One hotels page. Owns its store; nothing here is process-global.
pub struct HotelsPage {
    state: Rc<RefCell<PageState>>,
    scroll: Debounce<ScrollSample>,
}

impl HotelsPage {
    pub fn new(config: &PageConfig, scheduler: Scheduler, images: Rc<dyn ImageLoader>) -> Self {
        let document = hotels_document().into_node();
        let (list, counter) = {
            let body = document.borrow();
            (
                body.find_by_class("hotels-list"),
                body.find_by_class("hotels-title-count-number"),
            )
        };
        // Both are part of the fixed page template.
        let list = list.unwrap_or_else(|| Element::new("div").into_node());
        let counter = counter.unwrap_or_else(|| Element::new("span").into_node());

        let state = Rc::new(RefCell::new(PageState {
            catalog_url: config.catalog_url.clone(),
            missing_rating: config.filter_rating_default,
            document,
            list,
            counter,
            store: CatalogStore::new(),
            ordered: Vec::new(),
            pagination: Pagination::new(config.page_size),
            renderer: CardRenderer::new(config, scheduler.clone(), images),
            cards: Vec::new(),
        }));

        let weak = Rc::downgrade(&state);
        let scroll = Debounce::new(scheduler, config.scroll_debounce, move |sample| {
            if let Some(state) = weak.upgrade() {
                state.borrow_mut().scroll_settled(&sample);
            }
        });

        Self { state, scroll }
    }

    /// Fetches the catalog once and renders the first page.
    /// On failure nothing is rendered and the list stays empty.
    pub fn boot(&self, source: &dyn CatalogSource) -> Result<usize, CatalogError> {
        let url = self.state.borrow().catalog_url.clone();

        match fetch_listings(source, &url) {
            Ok(listings) => {
                let count = listings.len();
                tracing::info!(%url, count, "catalog loaded");
                self.load(listings);
                Ok(count)
            }
            Err(e) => {
                tracing::warn!(%url, "catalog unavailable: {e}");
                Err(e)
            }
        }
    }

    pub fn load(&self, listings: Vec<Listing>) {
        // A sample taken against the old list means nothing now.
        self.scroll.cancel();

        let mut state = self.state.borrow_mut();
        // Loading resets the store to ShowAll; the highlight still sits on
        // whatever was active before.
        let previous = state.store.active_filter();
        state.store.load(listings);
        if state.store.is_empty() {
            tracing::info!(url = %state.catalog_url, "catalog has no hotels");
        }
        let total = state.store.len().to_string();
        state.counter.borrow_mut().set_text(&total);
        state.select_filter(previous, FilterId::ShowAll, true);
    }

    /// Delegated click handler for the filter bar. `target` is whatever was
    /// clicked; anything that isn't a filter control is ignored.
    /// Returns true when the active filter changed.
    pub fn dispatch_click(&self, target: &NodeRef) -> bool {
        let filter = {
            let target = target.borrow();
            if !target.has_class(FILTER_CLASS) {
                return false;
            }
            target.id().and_then(FilterId::from_control_id)
        };
        match filter {
            Some(filter) => {
                let mut state = self.state.borrow_mut();
                let previous = state.store.active_filter();
                state.select_filter(previous, filter, false)
            }
            None => false,
        }
    }

    /// Clicks the element with `id`, if the page has one.
    pub fn click(&self, id: &str) -> bool {
        let target = self.state.borrow().document.borrow().find_by_id(id);
        match target {
            Some(node) => self.dispatch_click(&node),
            None => false,
        }
    }

    /// Feeds a viewport sample to the debounced page advance.
    pub fn scroll(&self, sample: ScrollSample) {
        self.scroll.call(sample);
    }

    pub fn active_filter(&self) -> FilterId {
        self.state.borrow().store.active_filter()
    }

    pub fn current_page(&self) -> usize {
        self.state.borrow().pagination.current_page()
    }

    pub fn filtered_len(&self) -> usize {
        self.state.borrow().ordered.len()
    }

    pub fn cards(&self) -> Vec<Card> {
        self.state.borrow().cards.clone()
    }

    /// Names in on-screen order, read back from the rendered cards.
    pub fn rendered_names(&self) -> Vec<String> {
        let state = self.state.borrow();
        let list = state.list.borrow();
        list.children()
            .iter()
            .filter_map(|card| {
                let name = card.borrow().find_by_class("hotel-name")?;
                let text = name.borrow().text().map(str::to_string);
                text
            })
            .collect()
    }

    pub fn document(&self) -> NodeRef {
        Rc::clone(&self.state.borrow().document)
    }

    pub fn render_html(&self) -> String {
        let document = self.document();
        let html = hotels_page(&document.borrow()).into_string();
        html
    }
}

impl PageState {
    fn select_filter(&mut self, previous: FilterId, filter: FilterId, force: bool) -> bool {
        if previous == filter && !force {
            return false;
        }

        {
            let document = self.document.borrow();
            if let Some(old) = document.find_by_id(previous.control_id()) {
                old.borrow_mut().remove_class(FILTER_SELECTED_CLASS);
            }
            if let Some(new) = document.find_by_id(filter.control_id()) {
                new.borrow_mut().add_class(FILTER_SELECTED_CLASS);
            }
        }

        self.ordered = domain::apply(self.store.all(), filter, self.missing_rating);
        self.store.set_active_filter(filter);
        self.pagination.reset();

        self.list.borrow_mut().clear_children();
        for card in self.cards.drain(..) {
            card.photo.cancel();
        }
        let first = 0..self.pagination.visible_len(self.ordered.len());
        tracing::debug!(?filter, matched = self.ordered.len(), "filter applied");
        self.render_range(first);
        true
    }

    fn scroll_settled(&mut self, sample: &ScrollSample) {
        if let Some(range) = self.pagination.maybe_advance(self.ordered.len(), sample) {
            tracing::debug!(page = self.pagination.current_page(), ?range, "next page");
            self.render_range(range);
        }
    }

    // Builds the whole batch first, then inserts it in one go.
    fn render_range(&mut self, range: Range<usize>) {
        let Some(slice) = self.ordered.get(range) else {
            return;
        };
        let cards: Vec<Card> = slice
            .iter()
            .map(|listing| self.renderer.render(listing))
            .collect();

        let fragment = cards.iter().map(|card| Rc::clone(&card.element)).collect();
        self.list.borrow_mut().append_all(fragment);
        self.cards.extend(cards);
    }
}
