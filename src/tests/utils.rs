use crate::catalog::CatalogSource;
use crate::config::PageConfig;
use crate::domain::{Listing, Location};
use crate::errors::CatalogError;
use crate::images::{ImageCallback, ImageFetch, ImageLoader, ImageOutcome};
use crate::page::HotelsPage;
use crate::runtime::{EventLoop, Scheduler};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

/// A plain listing; tweak fields with struct update syntax.
pub fn listing(name: &str) -> Listing {
    Listing {
        name: name.to_string(),
        location: Location {
            lat: 35.41,
            lng: 139.36,
        },
        distance: 0.0,
        price: 1000.0,
        rating: Some(7.0),
        stars: 3,
        amenities: vec![],
        preview: format!("img/{}.jpg", name.to_lowercase().replace(' ', "-")),
        pictures: vec![],
    }
}

/// `count` listings named "Hotel 0".."Hotel N" with increasing prices.
pub fn numbered(count: usize) -> Vec<Listing> {
    (0..count)
        .map(|i| Listing {
            price: 100.0 * (i as f64 + 1.0),
            ..listing(&format!("Hotel {i}"))
        })
        .collect()
}

pub fn names(listings: &[Listing]) -> Vec<&str> {
    listings.iter().map(|l| l.name.as_str()).collect()
}

/// How a scripted photo request behaves.
#[derive(Debug, Clone, Copy)]
pub enum Plan {
    /// Settles after the delay; aborting cancels it.
    After(Duration, ImageOutcome),
    /// Settles after the delay even if aborted.
    Stubborn(Duration, ImageOutcome),
    /// Settles inside `load`.
    Immediately(ImageOutcome),
    Never,
}

/// Image loader on the virtual clock.
pub struct ScriptedImages {
    scheduler: Scheduler,
    default: Plan,
    plans: RefCell<HashMap<String, Plan>>,
    pub requested: RefCell<Vec<String>>,
    pub aborted: Rc<RefCell<Vec<String>>>,
}

impl ScriptedImages {
    pub fn new(scheduler: Scheduler, default: Plan) -> Rc<Self> {
        Rc::new(Self {
            scheduler,
            default,
            plans: RefCell::new(HashMap::new()),
            requested: RefCell::new(Vec::new()),
            aborted: Rc::new(RefCell::new(Vec::new())),
        })
    }

    pub fn plan(&self, url: &str, plan: Plan) {
        self.plans.borrow_mut().insert(url.to_string(), plan);
    }
}

impl ImageLoader for ScriptedImages {
    fn load(&self, url: &str, done: ImageCallback) -> ImageFetch {
        self.requested.borrow_mut().push(url.to_string());
        let plan = self
            .plans
            .borrow()
            .get(url)
            .copied()
            .unwrap_or(self.default);

        let aborted = Rc::clone(&self.aborted);
        let url = url.to_string();

        match plan {
            Plan::Immediately(outcome) => {
                done(outcome);
                ImageFetch::settled()
            }
            Plan::Never => ImageFetch::new(move || aborted.borrow_mut().push(url)),
            Plan::After(delay, outcome) => {
                let timer = self.scheduler.set_timeout(delay, move || done(outcome));
                let scheduler = self.scheduler.clone();
                ImageFetch::new(move || {
                    scheduler.clear_timeout(timer);
                    aborted.borrow_mut().push(url);
                })
            }
            Plan::Stubborn(delay, outcome) => {
                self.scheduler.set_timeout(delay, move || done(outcome));
                ImageFetch::new(move || aborted.borrow_mut().push(url))
            }
        }
    }
}

/// Catalog source serving a fixed body, or failing.
pub struct StaticCatalog {
    body: Result<String, u16>,
    pub fetches: Cell<usize>,
}

impl StaticCatalog {
    pub fn listings(listings: &[Listing]) -> Self {
        Self {
            body: Ok(serde_json::to_string(listings).unwrap()),
            fetches: Cell::new(0),
        }
    }

    pub fn raw(body: &str) -> Self {
        Self {
            body: Ok(body.to_string()),
            fetches: Cell::new(0),
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            body: Err(status),
            fetches: Cell::new(0),
        }
    }
}

impl CatalogSource for StaticCatalog {
    fn fetch_text(&self, _location: &str) -> Result<String, CatalogError> {
        self.fetches.set(self.fetches.get() + 1);
        self.body.clone().map_err(CatalogError::Status)
    }
}

pub struct Harness {
    pub event_loop: EventLoop,
    pub images: Rc<ScriptedImages>,
    pub page: HotelsPage,
}

/// A page on a fresh virtual clock whose photos follow `plan`.
pub fn harness(plan: Plan) -> Harness {
    let event_loop = EventLoop::new();
    let images = ScriptedImages::new(event_loop.scheduler(), plan);
    let page = HotelsPage::new(
        &PageConfig::default(),
        event_loop.scheduler(),
        images.clone(),
    );
    Harness {
        event_loop,
        images,
        page,
    }
}

pub fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}
