use std::fs;

use anyhow::{Context, Result};

use chowmap_boundary as json;
use chowmap_core::{
    entities::{Id, MapPoint, Place, PriceTier, SortOrder},
    gateways::LocationGateway as _,
    usecases,
};
use chowmap_db_json::FileCatalog;

use crate::{
    cli::{
        Args, ClearArgs, Command, EditArgs, ExportArgs, FacetArgs, FilterArgs, ListArgs, ShowArgs,
    },
    config,
    locate::CommandLocator,
};

pub fn run(args: Args) -> Result<()> {
    let Args {
        config,
        data,
        overlay,
        command,
    } = args;
    let mut config = config::Config::try_load_from_file_or_default(config.as_deref())?;
    if let Some(data) = data {
        config.catalog.places = data;
    }
    if let Some(overlay) = overlay {
        config.catalog.overlay = overlay;
    }
    let catalog = FileCatalog::new(config.catalog.places.clone(), config.catalog.overlay.clone());

    match command {
        Command::List(args) => list(&catalog, &config.location, args),
        Command::Show(args) => show(&catalog, args),
        Command::Facets(args) => facets(&catalog, args),
        Command::Edit(args) => edit(&catalog, args),
        Command::Clear(args) => clear(&catalog, args),
        Command::Export(args) => export(&catalog, args),
        Command::Share(args) => share(args),
    }
}

fn list(catalog: &FileCatalog, location: &config::Location, args: ListArgs) -> Result<()> {
    let ListArgs { filter, json } = args;
    let near = filter.near;
    let query = filter.into_query();
    let origin = resolve_origin(near, query.sort, location);
    let places = usecases::query_catalog(catalog, &query, origin)
        .with_context(|| dataset_context(catalog))?;
    if json {
        let rows: Vec<json::Place> = places.into_iter().map(Into::into).collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else if places.is_empty() {
        println!("No matching places.");
    } else {
        for place in &places {
            println!("{}", fmt_place_line(place, origin));
        }
    }
    Ok(())
}

fn show(catalog: &FileCatalog, args: ShowArgs) -> Result<()> {
    let ShowArgs { id, json } = args;
    let id = Id::from(id);
    let place = usecases::effective_place(catalog, &id)
        .with_context(|| format!("Unable to show place {id}"))?;
    if json {
        println!("{}", serde_json::to_string_pretty(&json::Place::from(place))?);
    } else {
        print_place_details(&place);
    }
    Ok(())
}

fn facets(catalog: &FileCatalog, args: FacetArgs) -> Result<()> {
    let places = usecases::effective_places(catalog).with_context(|| dataset_context(catalog))?;
    let facets = usecases::derive_facets(&places);
    if args.json {
        let value = serde_json::json!({
            "cities": facets.cities,
            "neighborhoods": facets.neighborhoods,
            "cuisines": facets.cuisines,
            "tags": facets.tags,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        print_facet_group("Cities", &facets.cities);
        print_facet_group("Neighborhoods", &facets.neighborhoods);
        print_facet_group("Cuisines", &facets.cuisines);
        print_facet_group("Tags", &facets.tags);
    }
    Ok(())
}

fn edit(catalog: &FileCatalog, args: EditArgs) -> Result<()> {
    let patch = args.patch();
    if patch.is_empty() {
        println!("Nothing to change.");
        return Ok(());
    }
    let id = Id::from(args.id);
    usecases::edit_place(catalog, &id, patch)
        .with_context(|| format!("Unable to edit place {id}"))?;
    println!("Recorded edits for {id}.");
    Ok(())
}

fn clear(catalog: &FileCatalog, args: ClearArgs) -> Result<()> {
    let ClearArgs { id, yes } = args;
    if !yes {
        println!(
            "This would drop the edits recorded in {}. Re-run with --yes to confirm.",
            catalog.overlay_path().display()
        );
        return Ok(());
    }
    match id {
        Some(id) => {
            let id = Id::from(id);
            usecases::clear_place_edits(catalog, &id);
            println!("Forgot the edits of {id}.");
        }
        None => {
            usecases::clear_edits(catalog);
            println!("Forgot all recorded edits.");
        }
    }
    Ok(())
}

fn export(catalog: &FileCatalog, args: ExportArgs) -> Result<()> {
    let places = usecases::effective_places(catalog).with_context(|| dataset_context(catalog))?;
    let rows: Vec<json::Place> = places.into_iter().map(Into::into).collect();
    let contents = serde_json::to_string_pretty(&rows)?;
    match args.out {
        Some(path) => {
            fs::write(&path, contents)
                .with_context(|| format!("Unable to write the export to {}", path.display()))?;
            println!("Exported {} places to {}.", rows.len(), path.display());
        }
        None => println!("{contents}"),
    }
    Ok(())
}

fn share(args: FilterArgs) -> Result<()> {
    let query = args.into_query();
    println!("?{}", json::encode_query(&query));
    Ok(())
}

fn dataset_context(catalog: &FileCatalog) -> String {
    format!(
        "Unable to read the catalog from {}",
        catalog.places_path().display()
    )
}

/// Picks the origin for the nearest sort.
///
/// An explicit `--near` always wins over the locator. Anything else
/// keeps the places in their incoming order.
fn resolve_origin(
    near: Option<MapPoint>,
    sort: SortOrder,
    location: &config::Location,
) -> Option<MapPoint> {
    if sort != SortOrder::Nearest {
        return None;
    }
    if near.is_some() {
        return near;
    }
    match &location.command {
        Some(command) => {
            CommandLocator::new(command.clone(), location.timeout).current_position()
        }
        None => {
            log::warn!("No locator command configured, keeping the incoming order");
            None
        }
    }
}

fn fmt_place_line(place: &Place, origin: Option<MapPoint>) -> String {
    let Place {
        id,
        name,
        pos,
        city,
        rating,
        price,
        would_return,
        ..
    } = place;
    let id = id.as_str();
    let rating = rating
        .map(|r| format!("{:.1}", f64::from(r)))
        .unwrap_or_else(|| "-".into());
    let price = price.map(PriceTier::symbol).unwrap_or("-");
    let city = city.as_deref().unwrap_or("-");
    let mut line = format!("{id:<12} {name:<28} {rating:>4} {price:<5} {city:<14}");
    if let (Some(origin), Some(pos)) = (origin, *pos) {
        line.push_str(&format!(
            " {:>6.1} mi",
            MapPoint::distance(origin, pos).to_miles()
        ));
    }
    match would_return {
        Some(true) => line.push_str("  return: yes"),
        Some(false) => line.push_str("  return: no"),
        None => {}
    }
    line
}

fn print_place_details(place: &Place) {
    let Place {
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
    } = place;
    println!("{name} ({id})");
    if let Some(address) = address {
        println!("  address:      {address}");
    }
    if let Some(pos) = pos {
        println!("  position:     {pos}");
    }
    if let Some(city) = city {
        println!("  city:         {city}");
    }
    if let Some(neighborhood) = neighborhood {
        println!("  neighborhood: {neighborhood}");
    }
    if !cuisines.is_empty() {
        println!("  cuisines:     {}", cuisines.join(", "));
    }
    if !tags.is_empty() {
        println!("  tags:         {}", tags.join(", "));
    }
    if let Some(rating) = rating {
        println!("  rating:       {:.1}", f64::from(*rating));
    }
    if let Some(price) = price {
        println!("  price:        {}", price.symbol());
    }
    match would_return {
        Some(true) => println!("  return:       yes"),
        Some(false) => println!("  return:       no"),
        None => {}
    }
    if let Some(notes) = notes {
        println!("  notes:        {notes}");
    }
    if let Some(photo_url) = photo_url {
        println!("  photo:        {photo_url}");
    }
    if let Some(website) = website {
        println!("  website:      {website}");
    }
    if let Some(visited_on) = visited_on {
        println!("  visited:      {visited_on}");
    }
}

fn print_facet_group(label: &str, values: &[String]) {
    if values.is_empty() {
        return;
    }
    println!("{label}: {}", values.join(", "));
}
