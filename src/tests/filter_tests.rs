// src/tests/filter_tests.rs
use crate::domain::{apply, FilterId, Listing, FILTER_CONTROLS};
use crate::tests::utils::{listing, names};

const ALL_FILTERS: [FilterId; 5] = [
    FilterId::ShowAll,
    FilterId::PriceDesc,
    FilterId::PriceAsc,
    FilterId::MinTwoStars,
    FilterId::MinSixRating,
];

fn mixed() -> Vec<Listing> {
    vec![
        Listing {
            price: 4200.0,
            stars: 5,
            rating: Some(8.1),
            ..listing("Grand")
        },
        Listing {
            price: 900.0,
            stars: 0,
            rating: Some(3.0),
            ..listing("Hostel")
        },
        Listing {
            price: 2500.0,
            stars: 3,
            rating: None,
            ..listing("Ryokan")
        },
        Listing {
            price: 1800.0,
            stars: 2,
            rating: Some(6.0),
            ..listing("Inn")
        },
        Listing {
            price: 3100.0,
            stars: 4,
            rating: Some(7.4),
            ..listing("Tower")
        },
    ]
}

#[test]
fn every_filter_is_deterministic() {
    let all = mixed();
    for filter in ALL_FILTERS {
        assert_eq!(apply(&all, filter, 0.0), apply(&all, filter, 0.0), "{filter:?}");
    }
}

#[test]
fn show_all_keeps_load_order() {
    let all = mixed();
    let ordered = apply(&all, FilterId::ShowAll, 0.0);
    assert_eq!(ordered, all);
}

#[test]
fn min_two_stars_keeps_strictly_more_than_two_ascending() {
    let all: Vec<Listing> = [5u8, 0, 3, 1, 4, 2]
        .iter()
        .map(|&stars| Listing {
            stars,
            ..listing(&format!("{stars} stars"))
        })
        .collect();

    let ordered = apply(&all, FilterId::MinTwoStars, 0.0);
    let stars: Vec<u8> = ordered.iter().map(|l| l.stars).collect();

    assert_eq!(stars, vec![3, 4, 5]);
}

#[test]
fn min_six_rating_keeps_six_and_up_ascending() {
    let all: Vec<Listing> = [3.0, 5.0, 6.0, 7.0]
        .iter()
        .rev()
        .map(|&rating| Listing {
            rating: Some(rating),
            ..listing(&format!("rated {rating}"))
        })
        .collect();

    let ordered = apply(&all, FilterId::MinSixRating, 0.0);
    let ratings: Vec<f64> = ordered.iter().filter_map(|l| l.rating).collect();

    assert_eq!(ratings, vec![6.0, 7.0]);
}

#[test]
fn price_orders_are_reverses_without_ties() {
    let all = mixed();
    let desc = apply(&all, FilterId::PriceDesc, 0.0);
    let mut asc = apply(&all, FilterId::PriceAsc, 0.0);
    asc.reverse();

    assert_eq!(desc, asc);
    assert_eq!(names(&desc), vec!["Grand", "Tower", "Ryokan", "Inn", "Hostel"]);
}

#[test]
fn price_ties_keep_load_order() {
    let all = vec![
        Listing {
            price: 500.0,
            ..listing("B")
        },
        Listing {
            price: 100.0,
            ..listing("A")
        },
        Listing {
            price: 500.0,
            ..listing("C")
        },
    ];

    assert_eq!(names(&apply(&all, FilterId::PriceAsc, 0.0)), vec!["A", "B", "C"]);
    assert_eq!(names(&apply(&all, FilterId::PriceDesc, 0.0)), vec!["B", "C", "A"]);
}

#[test]
fn missing_rating_uses_the_filter_default_not_the_display_one() {
    let all = mixed();

    // Ryokan has no rating: excluded at 0.0, included (first, stable) at 6.0.
    let strict = apply(&all, FilterId::MinSixRating, 0.0);
    assert_eq!(names(&strict), vec!["Inn", "Tower", "Grand"]);

    let lenient = apply(&all, FilterId::MinSixRating, 6.0);
    assert_eq!(names(&lenient), vec!["Ryokan", "Inn", "Tower", "Grand"]);
}

#[test]
fn source_set_is_never_reordered() {
    let all = mixed();
    let before = all.clone();

    for filter in ALL_FILTERS {
        let _ = apply(&all, filter, 0.0);
    }

    assert_eq!(all, before);
}

#[test]
fn control_ids_map_both_ways() {
    for (control, filter) in FILTER_CONTROLS {
        assert_eq!(FilterId::from_control_id(control), Some(filter));
        assert_eq!(filter.control_id(), control);
    }
    assert_eq!(FilterId::from_control_id("filter-unknown"), None);
    assert_eq!(FilterId::from_control_id(""), None);
}
