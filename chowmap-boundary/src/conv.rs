use super::*;
use chowmap_entities as e;
use e::place::FieldEdit;

impl From<e::place::Place> for Place {
    fn from(from: e::place::Place) -> Self {
        let e::place::Place {
            id,
            name,
            address,
            pos,
            city,
            neighborhood,
            cuisines,
            tags,
            rating,
            price,
            would_return,
            notes,
            photo_url,
            website,
            visited_on,
        } = from;
        let (lat, lng) = match pos {
            Some(pos) => {
                let (lat, lng) = pos.to_lat_lng_deg();
                (Some(lat), Some(lng))
            }
            None => (None, None),
        };
        Self {
            id: id.into(),
            name,
            address,
            lat,
            lng,
            city,
            neighborhood,
            cuisines,
            tags,
            rating: rating.map(Into::into),
            price: price.map(Into::into),
            would_return,
            notes,
            photo: photo_url,
            website,
            visited_at: visited_on.map(Into::into),
        }
    }
}

impl From<Place> for e::place::Place {
    fn from(from: Place) -> Self {
        let Place {
            id,
            name,
            address,
            lat,
            lng,
            city,
            neighborhood,
            cuisines,
            tags,
            rating,
            price,
            would_return,
            notes,
            photo,
            website,
            visited_at,
        } = from;
        // Coordinates outside the valid degree ranges are dropped.
        let pos = match (lat, lng) {
            (Some(lat), Some(lng)) => e::geo::MapPoint::try_from_lat_lng_deg(lat, lng),
            _ => None,
        };
        Self {
            id: id.into(),
            name,
            address,
            pos,
            city,
            neighborhood,
            cuisines,
            tags,
            rating: rating.map(|r| e::rating::StarRating::from(r).clamp()),
            price: price.and_then(|p| e::price::PriceTier::try_from(p).ok()),
            would_return,
            notes,
            photo_url: photo,
            website,
            visited_on: visited_at.map(Into::into),
        }
    }
}

impl From<e::place::PlacePatch> for PlacePatch {
    fn from(from: e::place::PlacePatch) -> Self {
        let e::place::PlacePatch {
            rating,
            price,
            would_return,
            notes,
            photo_url,
        } = from;
        Self {
            rating: nullable(rating),
            price: nullable(price),
            would_return: nullable(would_return),
            notes: nullable(notes),
            photo: nullable(photo_url),
        }
    }
}

impl From<PlacePatch> for e::place::PlacePatch {
    fn from(from: PlacePatch) -> Self {
        let PlacePatch {
            rating,
            price,
            would_return,
            notes,
            photo,
        } = from;
        Self {
            rating: match rating {
                None => FieldEdit::Keep,
                Some(None) => FieldEdit::Clear,
                Some(Some(value)) => FieldEdit::Set(e::rating::StarRating::from(value).clamp()),
            },
            // A tier outside the valid range clears the stored value.
            price: price
                .map(|value| {
                    value
                        .and_then(|v| e::price::PriceTier::try_from(v).ok())
                        .into()
                })
                .unwrap_or_default(),
            would_return: would_return.map(Into::into).unwrap_or_default(),
            notes: notes.map(Into::into).unwrap_or_default(),
            photo_url: photo.map(Into::into).unwrap_or_default(),
        }
    }
}

fn nullable<T, U: From<T>>(from: FieldEdit<T>) -> Option<Option<U>> {
    match from {
        FieldEdit::Keep => None,
        FieldEdit::Clear => Some(None),
        FieldEdit::Set(value) => Some(Some(value.into())),
    }
}
