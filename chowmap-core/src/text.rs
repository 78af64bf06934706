use crate::entities::Place;

/// Canonical form of a free-text search term.
pub fn normalize_term(term: &str) -> String {
    term.trim().to_lowercase()
}

/// The case-folded text a free-text search runs against, i.e. all
/// human-readable fields of a place joined by single spaces.
pub fn place_haystack(place: &Place) -> String {
    let Place {
        name,
        address,
        city,
        neighborhood,
        cuisines,
        tags,
        notes,
        ..
    } = place;
    std::iter::once(name.as_str())
        .chain(address.as_deref())
        .chain(city.as_deref())
        .chain(neighborhood.as_deref())
        .chain(cuisines.iter().map(String::as_str))
        .chain(tags.iter().map(String::as_str))
        .chain(notes.as_deref())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chowmap_entities::builders::*;

    #[test]
    fn normalizes_terms() {
        assert_eq!("ramen", normalize_term("  Ramen "));
        assert_eq!("", normalize_term("   "));
    }

    #[test]
    fn haystack_joins_all_text_fields() {
        let place = Place::build()
            .name("Ramen House")
            .address("500 Pine St")
            .city("Seattle")
            .neighborhood("Downtown")
            .cuisines(vec!["Japanese"])
            .tags(vec!["noodles", "late-night"])
            .notes("Get there early")
            .finish();
        let haystack = place_haystack(&place);
        assert_eq!(
            "ramen house 500 pine st seattle downtown japanese noodles late-night get there early",
            haystack
        );
    }

    #[test]
    fn haystack_skips_missing_fields() {
        let place = Place::build().name("Taco Stand").finish();
        assert_eq!("taco stand", place_haystack(&place));
    }
}
