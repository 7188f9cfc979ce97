use crate::dom::Element;
use crate::domain::FILTER_CONTROLS;

pub mod card;

pub use card::hotel_template;

pub const FILTER_CLASS: &str = "hotel-filter";
pub const FILTER_SELECTED_CLASS: &str = "hotel-filter-selected";

/// The filter bar. Clicks are handled once, on this container.
pub fn filter_bar() -> Element {
    FILTER_CONTROLS
        .iter()
        .fold(
            Element::new("div").with_class("hotels-filters"),
            |bar, (id, filter)| {
                bar.with_child(
                    Element::new("button")
                        .with_id(id)
                        .with_class(FILTER_CLASS)
                        .with_attr("type", "button")
                        .with_text(filter.label()),
                )
            },
        )
}
