// src/domain/filters.rs

use crate::domain::listing::Listing;
use std::cmp::Ordering;

/// The sort+filter combinations offered by the filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterId {
    ShowAll,
    PriceDesc,
    PriceAsc,
    MinTwoStars,
    MinSixRating,
}

/// Filter bar controls, by element id.
pub const FILTER_CONTROLS: [(&str, FilterId); 5] = [
    ("filter-all", FilterId::ShowAll),
    ("filter-expensive", FilterId::PriceDesc),
    ("filter-cheap", FilterId::PriceAsc),
    ("filter-2stars", FilterId::MinTwoStars),
    ("filter-6rating", FilterId::MinSixRating),
];

impl FilterId {
    pub fn from_control_id(id: &str) -> Option<Self> {
        FILTER_CONTROLS
            .iter()
            .find(|(control, _)| *control == id)
            .map(|(_, filter)| *filter)
    }

    pub fn control_id(self) -> &'static str {
        FILTER_CONTROLS
            .iter()
            .find(|(_, filter)| *filter == self)
            .map(|(control, _)| *control)
            .unwrap_or("filter-all")
    }

    /// Button caption in the filter bar.
    pub fn label(self) -> &'static str {
        match self {
            FilterId::ShowAll => "Все",
            FilterId::PriceDesc => "Сначала дорогие",
            FilterId::PriceAsc => "Сначала дешёвые",
            FilterId::MinTwoStars => "Больше 2 звёзд",
            FilterId::MinSixRating => "Рейтинг от 6",
        }
    }
}

/// Produces the ordered subset for `filter`. `all` is never touched;
/// the result is always a fresh copy.
///
/// `missing_rating` stands in for absent ratings in the rating sort/filter.
/// It is independent of the default shown on cards.
pub fn apply(all: &[Listing], filter: FilterId, missing_rating: f64) -> Vec<Listing> {
    let mut ordered = all.to_vec();

    match filter {
        FilterId::ShowAll => {}

        FilterId::PriceDesc => ordered.sort_by(|a, b| cmp_f64(b.price, a.price)),

        FilterId::PriceAsc => ordered.sort_by(|a, b| cmp_f64(a.price, b.price)),

        // Strictly more than two stars.
        FilterId::MinTwoStars => {
            ordered.sort_by_key(|l| l.stars);
            ordered.retain(|l| l.stars > 2);
        }

        FilterId::MinSixRating => {
            let rating = |l: &Listing| l.rating.unwrap_or(missing_rating);
            ordered.sort_by(|a, b| cmp_f64(rating(a), rating(b)));
            ordered.retain(|l| rating(l) >= 6.0);
        }
    }

    ordered
}

// `sort_by` is stable, so ties keep load order.
fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}
