use super::prelude::*;
use crate::repositories::Error as RepoError;

/// All base places with their local edits applied, in dataset order.
pub fn effective_places<R>(repo: &R) -> Result<Vec<Place>>
where
    R: PlaceRepo + OverlayRepo,
{
    let overlay = super::load_overlay_or_default(repo);
    Ok(super::merge_overlay(repo.all_places()?, &overlay))
}

/// A single place with its local edits applied.
pub fn effective_place<R>(repo: &R, id: &Id) -> Result<Place>
where
    R: PlaceRepo + OverlayRepo,
{
    let place = repo.get_place(id.as_str()).map_err(|err| match err {
        RepoError::NotFound => Error::PlaceDoesNotExist,
        err => Error::Repo(err),
    })?;
    let overlay = super::load_overlay_or_default(repo);
    Ok(match overlay.get(id) {
        Some(patch) => place.with_edits(patch),
        None => place,
    })
}

/// Runs the whole pipeline: merge the overlay, filter, sort.
pub fn query_catalog<R>(
    repo: &R,
    query: &CatalogQuery,
    origin: Option<MapPoint>,
) -> Result<Vec<Place>>
where
    R: PlaceRepo + OverlayRepo,
{
    let mut places = super::filter_places(effective_places(repo)?, query);
    super::sort_places(&mut places, query.sort, origin);
    Ok(places)
}
