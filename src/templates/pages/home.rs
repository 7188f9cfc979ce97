// templates/pages/home.rs

use crate::dom::Element;
use crate::templates::{desktop_layout, filter_bar};
use maud::Markup;

/// Body of the hotels page: counter, filters, the list container and the footer
/// the scroll logic watches for.
pub fn hotels_document() -> Element {
    Element::new("body")
        .with_child(
            Element::new("h2")
                .with_class("hotels-title")
                .with_text("Найдено отелей: ")
                .with_child(
                    Element::new("span")
                        .with_class("hotels-title-count-number")
                        .with_text("0"),
                ),
        )
        .with_child(filter_bar())
        .with_child(Element::new("div").with_class("hotels-list"))
        .with_child(Element::new("footer").with_class("footer"))
}

pub fn hotels_page(document: &Element) -> Markup {
    desktop_layout("Отели", document)
}
