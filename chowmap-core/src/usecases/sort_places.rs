use std::cmp::Ordering;

use super::prelude::*;

/// Reorders the places in-place according to the requested order.
///
/// All strategies are stable, i.e. places that compare equal keep
/// their relative order. Sorting by distance needs a known user
/// position, without one the incoming order is kept.
pub fn sort_places(places: &mut [Place], sort: SortOrder, origin: Option<MapPoint>) {
    match sort {
        SortOrder::Top => {
            places.sort_by(|a, b| {
                rating_key(b)
                    .partial_cmp(&rating_key(a))
                    .unwrap_or(Ordering::Equal)
            });
        }
        SortOrder::Name => {
            places.sort_by_key(|place| place.name.to_lowercase());
        }
        SortOrder::Recent => {
            places.sort_by(|a, b| visited_key(b).cmp(visited_key(a)));
        }
        SortOrder::Nearest => {
            let Some(origin) = origin else {
                return;
            };
            places.sort_by(|a, b| cmp_distance(distance_from(origin, a), distance_from(origin, b)));
        }
    }
}

// Unrated places rank below every real rating.
fn rating_key(place: &Place) -> f64 {
    place.rating.map(f64::from).unwrap_or(-1.0)
}

// Places never visited compare like the empty string.
fn visited_key(place: &Place) -> &str {
    place
        .visited_on
        .as_ref()
        .map(VisitedOn::as_str)
        .unwrap_or("")
}

fn distance_from(origin: MapPoint, place: &Place) -> Option<Distance> {
    place.pos.map(|pos| MapPoint::distance(origin, pos))
}

// Unknown distances always sort last.
fn cmp_distance(a: Option<Distance>, b: Option<Distance>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
