use std::str::FromStr;

use chowmap_entities::{
    price::PriceTier,
    query::{CatalogQuery, SortOrder},
};
use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};

/// Renders the query as a shareable parameter string.
///
/// Parameters appear in a canonical order and inactive constraints
/// are omitted, so equal queries always produce equal strings.
pub fn encode_query(query: &CatalogQuery) -> String {
    let CatalogQuery {
        text,
        city,
        neighborhood,
        cuisine,
        tag,
        min_rating,
        price,
        would_return_only,
        sort,
    } = query;
    let mut params = Vec::new();
    if let Some(text) = text {
        params.push(("q", encode_component(text)));
    }
    if let Some(city) = city {
        params.push(("city", encode_component(city)));
    }
    if let Some(cuisine) = cuisine {
        params.push(("cuisine", encode_component(cuisine)));
    }
    if let Some(neighborhood) = neighborhood {
        params.push(("hood", encode_component(neighborhood)));
    }
    if let Some(tag) = tag {
        params.push(("tag", encode_component(tag)));
    }
    if *min_rating > 0.0 {
        params.push(("minRating", min_rating.to_string()));
    }
    if let Some(price) = price {
        params.push(("price", u8::from(*price).to_string()));
    }
    if *would_return_only {
        params.push(("return", "1".to_string()));
    }
    if *sort != SortOrder::default() {
        params.push(("sort", sort.as_str().to_string()));
    }
    params
        .into_iter()
        .map(|(key, value)| [key, &value].join("="))
        .collect::<Vec<_>>()
        .join("&")
}

/// Parses a shared parameter string, with or without the leading
/// question mark.
///
/// Decoding never fails: unknown parameters are ignored and
/// malformed values fall back to their defaults.
pub fn decode_query(input: &str) -> CatalogQuery {
    let input = input.strip_prefix('?').unwrap_or(input);
    let mut query = CatalogQuery::default();
    for pair in input.split('&') {
        if pair.is_empty() {
            continue;
        }
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        let value = decode_component(value);
        match key {
            "q" => query.text = non_empty(value),
            "city" => query.city = non_empty(value),
            "cuisine" => query.cuisine = non_empty(value),
            "hood" => query.neighborhood = non_empty(value),
            "tag" => query.tag = non_empty(value),
            "minRating" => {
                query.min_rating = value
                    .parse()
                    .ok()
                    .filter(|r: &f64| r.is_finite() && *r > 0.0)
                    .unwrap_or_default();
            }
            "price" => {
                query.price = value
                    .parse()
                    .ok()
                    .and_then(|p: u8| PriceTier::try_from(p).ok());
            }
            "return" => query.would_return_only = value == "1",
            "sort" => query.sort = SortOrder::from_str(&value).unwrap_or_default(),
            _ => (),
        }
    }
    query
}

fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, NON_ALPHANUMERIC).to_string()
}

// Form-encoded pluses count as spaces, percent escapes are decoded
// leniently.
fn decode_component(value: &str) -> String {
    let value = value.replace('+', " ");
    percent_decode_str(&value).decode_utf8_lossy().into_owned()
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_encodes_to_nothing() {
        assert_eq!("", encode_query(&CatalogQuery::default()));
        assert_eq!(CatalogQuery::default(), decode_query(""));
    }

    #[test]
    fn canonical_parameter_order() {
        let query = CatalogQuery {
            text: Some("pho".into()),
            city: Some("Seattle".into()),
            neighborhood: Some("Ballard".into()),
            cuisine: Some("vietnamese".into()),
            tag: Some("cozy".into()),
            min_rating: 4.5,
            price: Some(PriceTier::Casual),
            would_return_only: true,
            sort: SortOrder::Nearest,
        };
        assert_eq!(
            "q=pho&city=Seattle&cuisine=vietnamese&hood=Ballard&tag=cozy\
             &minRating=4.5&price=2&return=1&sort=nearest",
            encode_query(&query)
        );
    }

    #[test]
    fn whole_ratings_encode_without_fraction() {
        let query = CatalogQuery {
            min_rating: 4.0,
            ..Default::default()
        };
        assert_eq!("minRating=4", encode_query(&query));
    }

    #[test]
    fn city_rating_name_share_link() {
        let query = CatalogQuery {
            city: Some("Seattle".into()),
            min_rating: 4.0,
            sort: SortOrder::Name,
            ..Default::default()
        };
        assert_eq!("city=Seattle&minRating=4&sort=name", encode_query(&query));
        assert_eq!(query, decode_query("?city=Seattle&minRating=4&sort=name"));
    }

    #[test]
    fn reserved_characters_survive() {
        let query = CatalogQuery {
            text: Some("dim sum & dumplings".into()),
            ..Default::default()
        };
        let encoded = encode_query(&query);
        assert_eq!("q=dim%20sum%20%26%20dumplings", encoded);
        assert_eq!(query, decode_query(&encoded));
    }

    #[test]
    fn plus_decodes_as_space() {
        let query = decode_query("q=dim+sum&hood=Capitol%20Hill");
        assert_eq!(Some("dim sum".into()), query.text);
        assert_eq!(Some("Capitol Hill".into()), query.neighborhood);
    }

    #[test]
    fn malformed_values_fall_back_to_defaults() {
        let query =
            decode_query("?city=Seattle&bogus=1&minRating=high&price=9&sort=sideways&return=yes");
        assert_eq!(Some("Seattle".into()), query.city);
        assert_eq!(0.0, query.min_rating);
        assert_eq!(None, query.price);
        assert_eq!(SortOrder::Top, query.sort);
        assert!(!query.would_return_only);
    }

    #[test]
    fn sort_parsing_ignores_case() {
        assert_eq!(SortOrder::Name, decode_query("sort=NAME").sort);
    }

    #[test]
    fn round_trip_preserves_the_query() {
        let queries = [
            CatalogQuery::default(),
            CatalogQuery {
                tag: Some("late night".into()),
                min_rating: 3.5,
                ..Default::default()
            },
            CatalogQuery {
                cuisine: Some("japanese".into()),
                price: Some(PriceTier::Splurge),
                would_return_only: true,
                sort: SortOrder::Recent,
                ..Default::default()
            },
        ];
        for query in queries {
            assert_eq!(query, decode_query(&encode_query(&query)));
        }
    }
}
