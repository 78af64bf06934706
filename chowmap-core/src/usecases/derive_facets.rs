use std::collections::BTreeSet;

use super::prelude::*;

/// The distinct attribute values of the current list, used to
/// populate filter choices. Facets never validate anything.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Facets {
    pub cities: Vec<String>,
    pub neighborhoods: Vec<String>,
    pub cuisines: Vec<String>,
    pub tags: Vec<String>,
}

pub fn derive_facets(places: &[Place]) -> Facets {
    let mut cities = BTreeSet::new();
    let mut neighborhoods = BTreeSet::new();
    let mut cuisines = BTreeSet::new();
    let mut tags = BTreeSet::new();

    for place in places {
        if let Some(city) = place.city.as_deref().filter(|c| !c.is_empty()) {
            cities.insert(city.to_string());
        }
        if let Some(hood) = place.neighborhood.as_deref().filter(|n| !n.is_empty()) {
            neighborhoods.insert(hood.to_string());
        }
        cuisines.extend(place.cuisines.iter().filter(|c| !c.is_empty()).cloned());
        tags.extend(place.tags.iter().filter(|t| !t.is_empty()).cloned());
    }

    Facets {
        cities: cities.into_iter().collect(),
        neighborhoods: neighborhoods.into_iter().collect(),
        cuisines: cuisines.into_iter().collect(),
        tags: tags.into_iter().collect(),
    }
}
