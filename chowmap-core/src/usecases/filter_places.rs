use super::prelude::*;
use crate::text;

/// Whether a place satisfies every active constraint of the query.
///
/// Inactive constraints always hold, so an empty query matches
/// everything. Empty strings count as inactive, like absent values.
pub fn place_matches(place: &Place, query: &CatalogQuery) -> bool {
    if let Some(city) = active(&query.city) {
        if place.city.as_deref() != Some(city) {
            return false;
        }
    }
    if let Some(neighborhood) = active(&query.neighborhood) {
        if place.neighborhood.as_deref() != Some(neighborhood) {
            return false;
        }
    }
    if let Some(cuisine) = active(&query.cuisine) {
        if !place.cuisines.iter().any(|c| c == cuisine) {
            return false;
        }
    }
    if let Some(tag) = active(&query.tag) {
        if !place.tags.iter().any(|t| t == tag) {
            return false;
        }
    }
    if let Some(price) = query.price {
        // A concrete tier is required, places without one fail.
        if place.price != Some(price) {
            return false;
        }
    }
    if query.would_return_only && place.would_return != Some(true) {
        return false;
    }
    if query.min_rating > 0.0 {
        // Unrated counts as zero.
        let rating = place.rating.map(f64::from).unwrap_or(0.0);
        if rating < query.min_rating {
            return false;
        }
    }
    if let Some(term) = &query.text {
        let term = text::normalize_term(term);
        if !term.is_empty() && !text::place_haystack(place).contains(&term) {
            return false;
        }
    }
    true
}

pub fn filter_places(places: Vec<Place>, query: &CatalogQuery) -> Vec<Place> {
    places
        .into_iter()
        .filter(|place| place_matches(place, query))
        .collect()
}

fn active(constraint: &Option<String>) -> Option<&str> {
    constraint.as_deref().filter(|value| !value.is_empty())
}
