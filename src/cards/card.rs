use crate::cards::labels::{
    amenity_class, amenity_label, rating_class, stars_class, AMENITY_CLASS,
};
use crate::cards::photo::Photo;
use crate::config::PageConfig;
use crate::dom::{Element, NodeRef};
use crate::domain::Listing;
use crate::images::ImageLoader;
use crate::runtime::Scheduler;
use crate::templates::components::hotel_template;
use std::rc::Rc;
use std::time::Duration;
use url::Url;

/// A populated card plus the photo load attached to it.
#[derive(Clone)]
pub struct Card {
    pub element: NodeRef,
    pub photo: Photo,
}

/// Turns listings into card subtrees. Never inserts anything into the page.
pub struct CardRenderer {
    template: Element,
    image_base: String,
    image_timeout: Duration,
    rating_default: f64,
    scheduler: Scheduler,
    loader: Rc<dyn ImageLoader>,
}

impl CardRenderer {
    pub fn new(config: &PageConfig, scheduler: Scheduler, loader: Rc<dyn ImageLoader>) -> Self {
        Self {
            template: hotel_template(),
            image_base: config.image_base.clone(),
            image_timeout: config.image_timeout,
            rating_default: config.display_rating_default,
            scheduler,
            loader,
        }
    }

    pub fn render(&self, listing: &Listing) -> Card {
        let element = self.template.deep_clone().into_node();
        self.populate(&element.borrow(), listing);

        let url = resolve_preview(&self.image_base, &listing.preview);
        let photo = Photo::start(
            &element,
            url,
            self.image_timeout,
            &self.scheduler,
            self.loader.as_ref(),
        );

        Card { element, photo }
    }

    fn populate(&self, card: &Element, listing: &Listing) {
        let rating = listing.rating.unwrap_or(self.rating_default);

        if let Some(stars) = card.find_by_class("hotel-stars") {
            stars.borrow_mut().add_class(stars_class(listing.stars));
        }
        if let Some(node) = card.find_by_class("hotel-rating") {
            let mut node = node.borrow_mut();
            node.add_class(rating_class(rating));
            node.set_text(&format!("{rating:.1}"));
        }
        if let Some(name) = card.find_by_class("hotel-name") {
            name.borrow_mut().set_text(&listing.name);
        }
        if let Some(price) = card.find_by_class("hotel-price-value") {
            price.borrow_mut().set_text(&listing.price.to_string());
        }

        if let Some(list) = card.find_by_class("hotel-amenities") {
            let mut list = list.borrow_mut();
            for amenity in listing.known_amenities() {
                list.append(
                    Element::new("li")
                        .with_class(AMENITY_CLASS)
                        .with_class(amenity_class(amenity))
                        .with_text(amenity_label(amenity))
                        .into_node(),
                );
            }
        }

        let skipped = listing.amenities.len() - listing.known_amenities().count();
        if skipped > 0 {
            tracing::debug!(hotel = %listing.name, skipped, "unknown amenities skipped");
        }
    }
}

/// Absolute previews pass through; relative ones hang off `base`.
pub fn resolve_preview(base: &str, preview: &str) -> String {
    if Url::parse(preview).is_ok() {
        return preview.to_string();
    }
    if let Ok(joined) = Url::parse(base).and_then(|base| base.join(preview)) {
        return joined.to_string();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        preview.trim_start_matches('/')
    )
}
