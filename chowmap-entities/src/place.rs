use std::fmt;

use crate::{geo::MapPoint, id::Id, price::PriceTier, rating::StarRating};

/// Visit date as a lexically ordered string, e.g. `2024-11-03`.
///
/// No calendar arithmetic is ever performed on it, so the
/// string representation is kept as-is.
#[derive(Debug, Default, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct VisitedOn(String);

impl VisitedOn {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<String> for VisitedOn {
    fn from(from: String) -> Self {
        Self(from)
    }
}

impl From<&str> for VisitedOn {
    fn from(from: &str) -> Self {
        from.to_owned().into()
    }
}

impl From<VisitedOn> for String {
    fn from(from: VisitedOn) -> Self {
        from.0
    }
}

impl fmt::Display for VisitedOn {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.write_str(self.as_str())
    }
}

/// A catalog entry as loaded from the base dataset.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub id           : Id,
    pub name         : String,
    pub address      : Option<String>,
    pub pos          : Option<MapPoint>,
    pub city         : Option<String>,
    pub neighborhood : Option<String>,
    pub cuisines     : Vec<String>,
    pub tags         : Vec<String>,
    pub rating       : Option<StarRating>,
    pub price        : Option<PriceTier>,
    pub would_return : Option<bool>,
    pub notes        : Option<String>,
    pub photo_url    : Option<String>,
    pub website      : Option<String>,
    pub visited_on   : Option<VisitedOn>,
}

impl Place {
    /// Overlays the mutable fields with the given edits.
    ///
    /// Identifier, name, and position always survive unchanged.
    pub fn with_edits(self, patch: &PlacePatch) -> Self {
        let PlacePatch {
            rating,
            price,
            would_return,
            notes,
            photo_url,
        } = patch.clone();
        Self {
            rating: rating.apply(self.rating),
            price: price.apply(self.price),
            would_return: would_return.apply(self.would_return),
            notes: notes.apply(self.notes),
            photo_url: photo_url.apply(self.photo_url),
            ..self
        }
    }
}

/// A pending change to a single optional field.
///
/// Distinguishes an untouched field from one that has been
/// explicitly cleared.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum FieldEdit<T> {
    #[default]
    Keep,
    Clear,
    Set(T),
}

impl<T> FieldEdit<T> {
    pub fn apply(self, base: Option<T>) -> Option<T> {
        match self {
            Self::Keep => base,
            Self::Clear => None,
            Self::Set(value) => Some(value),
        }
    }

    /// Combines two edits of the same field, the newer one wins
    /// unless it leaves the field untouched.
    pub fn merge(self, newer: Self) -> Self {
        match newer {
            Self::Keep => self,
            edit => edit,
        }
    }

    pub fn is_keep(&self) -> bool {
        matches!(self, Self::Keep)
    }
}

impl<T> From<Option<T>> for FieldEdit<T> {
    fn from(from: Option<T>) -> Self {
        match from {
            Some(value) => Self::Set(value),
            None => Self::Clear,
        }
    }
}

/// The locally editable subset of a place.
#[rustfmt::skip]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PlacePatch {
    pub rating       : FieldEdit<StarRating>,
    pub price        : FieldEdit<PriceTier>,
    pub would_return : FieldEdit<bool>,
    pub notes        : FieldEdit<String>,
    pub photo_url    : FieldEdit<String>,
}

impl PlacePatch {
    /// Field-wise combination with `newer` taking precedence.
    pub fn merge(self, newer: Self) -> Self {
        Self {
            rating: self.rating.merge(newer.rating),
            price: self.price.merge(newer.price),
            would_return: self.would_return.merge(newer.would_return),
            notes: self.notes.merge(newer.notes),
            photo_url: self.photo_url.merge(newer.photo_url),
        }
    }

    pub fn is_empty(&self) -> bool {
        let Self {
            rating,
            price,
            would_return,
            notes,
            photo_url,
        } = self;
        rating.is_keep()
            && price.is_keep()
            && would_return.is_keep()
            && notes.is_keep()
            && photo_url.is_keep()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_place() -> Place {
        Place {
            id: "p1".into(),
            name: "Ramen House".into(),
            address: Some("500 Pine St".into()),
            pos: MapPoint::try_from_lat_lng_deg(47.6062, -122.3321),
            city: Some("Seattle".into()),
            neighborhood: Some("Downtown".into()),
            cuisines: vec!["japanese".into()],
            tags: vec!["noodles".into()],
            rating: Some(4.5.into()),
            price: Some(PriceTier::Casual),
            would_return: Some(true),
            notes: Some("get there early".into()),
            photo_url: None,
            website: None,
            visited_on: Some("2024-11-03".into()),
        }
    }

    #[test]
    fn empty_patch_keeps_everything() {
        let place = base_place();
        assert_eq!(place.clone(), place.with_edits(&PlacePatch::default()));
    }

    #[test]
    fn patched_fields_win_unpatched_fields_survive() {
        let patch = PlacePatch {
            rating: FieldEdit::Set(2.0.into()),
            notes: FieldEdit::Clear,
            ..Default::default()
        };
        let merged = base_place().with_edits(&patch);
        assert_eq!(Some(StarRating::from(2.0)), merged.rating);
        assert_eq!(None, merged.notes);
        assert_eq!(Some(PriceTier::Casual), merged.price);
        assert_eq!(Some(true), merged.would_return);
    }

    #[test]
    fn edits_never_touch_identity() {
        let patch = PlacePatch {
            rating: FieldEdit::Clear,
            price: FieldEdit::Clear,
            would_return: FieldEdit::Clear,
            notes: FieldEdit::Clear,
            photo_url: FieldEdit::Clear,
        };
        let base = base_place();
        let merged = base.clone().with_edits(&patch);
        assert_eq!(base.id, merged.id);
        assert_eq!(base.name, merged.name);
        assert_eq!(base.pos, merged.pos);
    }

    #[test]
    fn merge_accumulates_distinct_fields() {
        let first = PlacePatch {
            notes: FieldEdit::Set("cash only".into()),
            ..Default::default()
        };
        let second = PlacePatch {
            rating: FieldEdit::Set(4.8.into()),
            ..Default::default()
        };
        let merged = first.merge(second);
        assert_eq!(FieldEdit::Set("cash only".into()), merged.notes);
        assert_eq!(FieldEdit::Set(4.8.into()), merged.rating);
    }

    #[test]
    fn merge_newer_edit_wins() {
        let first = PlacePatch {
            rating: FieldEdit::Set(3.0.into()),
            ..Default::default()
        };
        let second = PlacePatch {
            rating: FieldEdit::Clear,
            ..Default::default()
        };
        assert_eq!(FieldEdit::<StarRating>::Clear, first.merge(second).rating);
    }

    #[test]
    fn empty_detection() {
        assert!(PlacePatch::default().is_empty());
        assert!(!PlacePatch {
            would_return: FieldEdit::Set(false),
            ..Default::default()
        }
        .is_empty());
    }
}
