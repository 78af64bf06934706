use super::prelude::*;

/// Applies the local edits to the base places.
///
/// Order and cardinality of the input are preserved, patches for
/// unknown ids are silently skipped.
pub fn merge_overlay(base: Vec<Place>, overlay: &Overlay) -> Vec<Place> {
    base.into_iter()
        .map(|place| match overlay.get(&place.id) {
            Some(patch) => place.with_edits(patch),
            None => place,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chowmap_entities::builders::*;

    #[test]
    fn empty_overlay_is_identity() {
        let base = vec![
            Place::build().id("a").name("Ramen House").finish(),
            Place::build().id("b").name("Taco Stand").finish(),
        ];
        assert_eq!(base.clone(), merge_overlay(base, &Overlay::default()));
    }

    #[test]
    fn patched_fields_take_precedence() {
        let base = vec![Place::build().id("a").rating(3.0).notes("old").finish()];
        let mut overlay = Overlay::default();
        overlay.apply("a".into(), PlacePatch::build().rating(4.8).finish());

        let merged = merge_overlay(base, &overlay);
        assert_eq!(Some(4.8.into()), merged[0].rating);
        assert_eq!(Some("old".to_string()), merged[0].notes.clone());
    }

    #[test]
    fn patches_for_unknown_ids_are_skipped() {
        let base = vec![Place::build().id("a").finish()];
        let mut overlay = Overlay::default();
        overlay.apply("ghost".into(), PlacePatch::build().rating(1.0).finish());

        let merged = merge_overlay(base.clone(), &overlay);
        assert_eq!(base, merged);
    }

    #[test]
    fn order_is_preserved() {
        let base = vec![
            Place::build().id("c").finish(),
            Place::build().id("a").finish(),
            Place::build().id("b").finish(),
        ];
        let mut overlay = Overlay::default();
        overlay.apply("a".into(), PlacePatch::build().would_return(true).finish());

        let ids: Vec<_> = merge_overlay(base, &overlay)
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(vec![Id::from("c"), Id::from("a"), Id::from("b")], ids);
    }
}
