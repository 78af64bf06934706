use strum::{EnumCount, EnumIter, EnumString};

use crate::price::PriceTier;

/// How the filtered catalog is ordered.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, EnumIter, EnumCount, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum SortOrder {
    /// Best rated first, unrated last.
    #[default]
    Top,
    /// Case-insensitive alphabetical.
    Name,
    /// Most recently visited first.
    Recent,
    /// Closest to the user first. Requires a known position,
    /// otherwise the incoming order is kept.
    Nearest,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Name => "name",
            Self::Recent => "recent",
            Self::Nearest => "nearest",
        }
    }
}

/// The active filter and sort parameters.
///
/// The user position is deliberately not part of this state, it
/// is passed alongside wherever distance ordering applies.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CatalogQuery {
    pub text: Option<String>,
    pub city: Option<String>,
    pub neighborhood: Option<String>,
    pub cuisine: Option<String>,
    pub tag: Option<String>,
    /// Zero means unconstrained.
    pub min_rating: f64,
    /// `None` means unconstrained.
    pub price: Option<PriceTier>,
    pub would_return_only: bool,
    pub sort: SortOrder,
}

impl CatalogQuery {
    pub fn is_empty(&self) -> bool {
        let Self {
            text,
            city,
            neighborhood,
            cuisine,
            tag,
            min_rating,
            price,
            would_return_only,
            sort,
        } = self;
        text.is_none()
            && city.is_none()
            && neighborhood.is_none()
            && cuisine.is_none()
            && tag.is_none()
            && *min_rating == 0.0
            && price.is_none()
            && !*would_return_only
            && *sort == SortOrder::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_query_is_empty() {
        assert!(CatalogQuery::default().is_empty());
        assert_eq!(SortOrder::Top, CatalogQuery::default().sort);
    }

    #[test]
    fn any_constraint_makes_it_non_empty() {
        let query = CatalogQuery {
            min_rating: 4.0,
            ..Default::default()
        };
        assert!(!query.is_empty());

        let query = CatalogQuery {
            sort: SortOrder::Name,
            ..Default::default()
        };
        assert!(!query.is_empty());
    }

    #[test]
    fn parse_sort_order() {
        use std::str::FromStr;
        assert_eq!(SortOrder::Top, SortOrder::from_str("top").unwrap());
        assert_eq!(SortOrder::Nearest, SortOrder::from_str("NEAREST").unwrap());
        assert_eq!(SortOrder::Recent, SortOrder::from_str("Recent").unwrap());
        assert!(SortOrder::from_str("sideways").is_err());
    }

    #[test]
    fn sort_order_names_roundtrip() {
        use std::str::FromStr;
        for sort in [
            SortOrder::Top,
            SortOrder::Name,
            SortOrder::Recent,
            SortOrder::Nearest,
        ] {
            assert_eq!(sort, SortOrder::from_str(sort.as_str()).unwrap());
        }
    }
}
