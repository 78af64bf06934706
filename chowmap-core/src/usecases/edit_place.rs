use super::prelude::*;
use crate::repositories::Error as RepoError;

/// Records local edits for an existing place.
///
/// The merged patch is persisted best-effort, the returned overlay
/// is authoritative even when the write failed.
pub fn edit_place<R>(repo: &R, id: &Id, patch: PlacePatch) -> Result<Overlay>
where
    R: PlaceRepo + OverlayRepo,
{
    // Only places of the base dataset can be edited.
    repo.get_place(id.as_str()).map_err(|err| match err {
        RepoError::NotFound => Error::PlaceDoesNotExist,
        err => Error::Repo(err),
    })?;

    let mut overlay = super::load_overlay_or_default(repo);
    overlay.apply(id.clone(), patch);
    super::store_overlay_best_effort(repo, &overlay);
    Ok(overlay)
}

/// Drops all local edits.
pub fn clear_edits<R>(repo: &R) -> Overlay
where
    R: OverlayRepo,
{
    let overlay = Overlay::default();
    super::store_overlay_best_effort(repo, &overlay);
    overlay
}

/// Drops the local edits of a single place.
///
/// Unknown identifiers are a no-op, the overlay is only rewritten
/// when an entry was actually removed.
pub fn clear_place_edits<R>(repo: &R, id: &Id) -> Overlay
where
    R: OverlayRepo,
{
    let mut overlay = super::load_overlay_or_default(repo);
    if overlay.remove(id).is_some() {
        super::store_overlay_best_effort(repo, &overlay);
    }
    overlay
}
