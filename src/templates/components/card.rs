use crate::dom::Element;

/// Skeleton every hotel card is cloned from.
pub fn hotel_template() -> Element {
    Element::new("article")
        .with_class("hotel")
        .with_child(Element::new("span").with_class("hotel-stars"))
        .with_child(Element::new("span").with_class("hotel-rating"))
        .with_child(Element::new("h3").with_class("hotel-name"))
        .with_child(
            Element::new("p")
                .with_class("hotel-price")
                .with_child(Element::new("span").with_class("hotel-price-value"))
                .with_child(Element::new("span").with_class("hotel-price-currency").with_text("₽")),
        )
        .with_child(Element::new("ul").with_class("hotel-amenities"))
}
