use std::path::PathBuf;

use chowmap_boundary::decode_query;
use chowmap_entities::{
    geo::MapPoint,
    place::{FieldEdit, PlacePatch},
    price::PriceTier,
    query::{CatalogQuery, SortOrder},
    rating::StarRating,
};

#[derive(Debug, clap::Parser)]
#[command(name = "chowmap", version, about = "A personal catalog of food spots")]
pub struct Args {
    /// Path of the configuration file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Path of the places dataset, overriding the configuration
    #[arg(long, global = true, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Path of the edit overlay, overriding the configuration
    #[arg(long, global = true, value_name = "FILE")]
    pub overlay: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// List places, filtered and sorted
    List(ListArgs),

    /// Show a single place in full
    Show(ShowArgs),

    /// Summarize the cities, neighborhoods, cuisines, and tags in use
    Facets(FacetArgs),

    /// Record edits for a place in the overlay
    Edit(EditArgs),

    /// Forget recorded edits
    Clear(ClearArgs),

    /// Export the merged catalog as JSON
    Export(ExportArgs),

    /// Print a shareable query string for the given filters
    Share(FilterArgs),
}

#[derive(Debug, clap::Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Print the places as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, clap::Args)]
pub struct ShowArgs {
    /// Identifier of the place
    pub id: String,

    /// Print the place as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, clap::Args)]
pub struct FacetArgs {
    /// Print the facets as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, clap::Args)]
pub struct ClearArgs {
    /// Forget the edits of this place only
    pub id: Option<String>,

    /// Confirm that the recorded edits should be dropped
    #[arg(long)]
    pub yes: bool,
}

#[derive(Debug, clap::Args)]
pub struct ExportArgs {
    /// Write the export to this file instead of stdout
    #[arg(long, value_name = "FILE")]
    pub out: Option<PathBuf>,
}

/// Shared filter and sort flags.
///
/// A `--query` string is decoded first, then the individual flags
/// override whatever it carried.
#[derive(Debug, clap::Args)]
pub struct FilterArgs {
    /// Query string as produced by `chowmap share`
    #[arg(long, value_name = "QUERY")]
    pub query: Option<String>,

    /// Match against name, notes, cuisines, and tags
    #[arg(long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Only places in this city
    #[arg(long)]
    pub city: Option<String>,

    /// Only places in this neighborhood
    #[arg(long)]
    pub hood: Option<String>,

    /// Only places serving this cuisine
    #[arg(long)]
    pub cuisine: Option<String>,

    /// Only places carrying this tag
    #[arg(long)]
    pub tag: Option<String>,

    /// Only places rated at least this many stars
    #[arg(long, value_name = "STARS")]
    pub min_rating: Option<f64>,

    /// Only places of this price tier, by number or name
    #[arg(long, value_name = "TIER")]
    pub price: Option<String>,

    /// Only places marked as worth returning to
    #[arg(long)]
    pub would_return: bool,

    /// Sort order: top, name, recent, or nearest
    #[arg(long)]
    pub sort: Option<SortOrder>,

    /// Origin for the nearest sort, instead of asking the locator
    #[arg(long, value_name = "LAT,LNG")]
    pub near: Option<MapPoint>,
}

impl FilterArgs {
    pub fn into_query(self) -> CatalogQuery {
        let Self {
            query,
            text,
            city,
            hood,
            cuisine,
            tag,
            min_rating,
            price,
            would_return,
            sort,
            near: _,
        } = self;
        let mut query = query.as_deref().map(decode_query).unwrap_or_default();
        if text.is_some() {
            query.text = text;
        }
        if city.is_some() {
            query.city = city;
        }
        if hood.is_some() {
            query.neighborhood = hood;
        }
        if cuisine.is_some() {
            query.cuisine = cuisine;
        }
        if tag.is_some() {
            query.tag = tag;
        }
        if let Some(stars) = min_rating {
            if stars.is_finite() && stars >= 0.0 {
                query.min_rating = stars;
            } else {
                log::warn!("Ignoring the minimum rating {stars}");
            }
        }
        if let Some(price) = price {
            match parse_price_tier(&price) {
                Some(tier) => query.price = Some(tier),
                None => log::warn!("Ignoring the price tier {price:?}"),
            }
        }
        if would_return {
            query.would_return_only = true;
        }
        if let Some(sort) = sort {
            query.sort = sort;
        }
        query
    }
}

#[derive(Debug, clap::Args)]
pub struct EditArgs {
    /// Identifier of the place
    pub id: String,

    /// Star rating between 0 and 5, or `none` to clear it
    #[arg(long, value_name = "STARS")]
    pub rating: Option<String>,

    /// Price tier by number or name, or `none` to clear it
    #[arg(long, value_name = "TIER")]
    pub price: Option<String>,

    /// Whether the place is worth returning to, or `none` to clear it
    #[arg(long, value_name = "YES|NO")]
    pub would_return: Option<String>,

    /// Personal notes, or `none` to clear them
    #[arg(long, value_name = "TEXT")]
    pub notes: Option<String>,

    /// Photo URL, or `none` to clear it
    #[arg(long, value_name = "URL")]
    pub photo: Option<String>,
}

impl EditArgs {
    pub fn patch(&self) -> PlacePatch {
        PlacePatch {
            rating: rating_edit(self.rating.as_deref()),
            price: price_edit(self.price.as_deref()),
            would_return: bool_edit(self.would_return.as_deref()),
            notes: text_edit(self.notes.as_deref()),
            photo_url: text_edit(self.photo.as_deref()),
        }
    }
}

fn text_edit(raw: Option<&str>) -> FieldEdit<String> {
    match raw {
        None => FieldEdit::Keep,
        Some("none") => FieldEdit::Clear,
        Some(text) => FieldEdit::Set(text.into()),
    }
}

fn rating_edit(raw: Option<&str>) -> FieldEdit<StarRating> {
    let raw = match raw {
        None => return FieldEdit::Keep,
        Some("none") => return FieldEdit::Clear,
        Some(raw) => raw,
    };
    match raw.parse::<f64>() {
        Ok(stars) if stars.is_finite() => {
            let rating = StarRating::from(stars);
            if !rating.is_valid() {
                log::warn!("Clamping the rating {stars} into the star range");
            }
            FieldEdit::Set(rating.clamp())
        }
        _ => {
            log::warn!("Not a rating: {raw:?}, clearing the stored value");
            FieldEdit::Clear
        }
    }
}

fn price_edit(raw: Option<&str>) -> FieldEdit<PriceTier> {
    let raw = match raw {
        None => return FieldEdit::Keep,
        Some("none") => return FieldEdit::Clear,
        Some(raw) => raw,
    };
    match parse_price_tier(raw) {
        Some(tier) => FieldEdit::Set(tier),
        None => {
            log::warn!("Not a price tier: {raw:?}, clearing the stored value");
            FieldEdit::Clear
        }
    }
}

fn bool_edit(raw: Option<&str>) -> FieldEdit<bool> {
    match raw {
        None => FieldEdit::Keep,
        Some("none") => FieldEdit::Clear,
        Some("yes") | Some("true") => FieldEdit::Set(true),
        Some("no") | Some("false") => FieldEdit::Set(false),
        Some(other) => {
            log::warn!("Not a yes/no answer: {other:?}, keeping the stored value");
            FieldEdit::Keep
        }
    }
}

fn parse_price_tier(raw: &str) -> Option<PriceTier> {
    raw.parse::<u8>()
        .ok()
        .and_then(|tier| PriceTier::try_from(tier).ok())
        .or_else(|| raw.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter_args() -> FilterArgs {
        FilterArgs {
            query: None,
            text: None,
            city: None,
            hood: None,
            cuisine: None,
            tag: None,
            min_rating: None,
            price: None,
            would_return: false,
            sort: None,
            near: None,
        }
    }

    #[test]
    fn edit_values_build_a_patch() {
        let args = EditArgs {
            id: "ramen-house".into(),
            rating: Some("4.5".into()),
            price: Some("2".into()),
            would_return: Some("yes".into()),
            notes: Some("none".into()),
            photo: None,
        };
        let patch = args.patch();
        assert_eq!(FieldEdit::Set(StarRating::from(4.5)), patch.rating);
        assert_eq!(FieldEdit::Set(PriceTier::Casual), patch.price);
        assert_eq!(FieldEdit::Set(true), patch.would_return);
        assert_eq!(FieldEdit::Clear, patch.notes);
        assert_eq!(FieldEdit::Keep, patch.photo_url);
    }

    #[test]
    fn broken_edit_values_coerce() {
        let args = EditArgs {
            id: "ramen-house".into(),
            rating: Some("eleven".into()),
            price: Some("9".into()),
            would_return: Some("maybe".into()),
            notes: None,
            photo: None,
        };
        let patch = args.patch();
        assert_eq!(FieldEdit::Clear, patch.rating);
        assert_eq!(FieldEdit::Clear, patch.price);
        assert_eq!(FieldEdit::Keep, patch.would_return);

        let args = EditArgs {
            id: "ramen-house".into(),
            rating: Some("7".into()),
            price: Some("casual".into()),
            would_return: Some("no".into()),
            notes: None,
            photo: None,
        };
        let patch = args.patch();
        assert_eq!(FieldEdit::Set(StarRating::max()), patch.rating);
        assert_eq!(FieldEdit::Set(PriceTier::Casual), patch.price);
        assert_eq!(FieldEdit::Set(false), patch.would_return);
    }

    #[test]
    fn filter_flags_override_the_shared_query() {
        let args = FilterArgs {
            query: Some("city=Seattle&minRating=4&sort=name".into()),
            city: Some("Bellevue".into()),
            would_return: true,
            ..filter_args()
        };
        let query = args.into_query();
        assert_eq!(Some("Bellevue".into()), query.city);
        assert_eq!(4.0, query.min_rating);
        assert!(query.would_return_only);
        assert_eq!(SortOrder::Name, query.sort);
    }

    #[test]
    fn senseless_filter_values_are_ignored() {
        let args = FilterArgs {
            min_rating: Some(f64::NAN),
            price: Some("luxurious".into()),
            ..filter_args()
        };
        let query = args.into_query();
        assert_eq!(0.0, query.min_rating);
        assert_eq!(None, query.price);
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory as _;
        Args::command().debug_assert();
    }
}
