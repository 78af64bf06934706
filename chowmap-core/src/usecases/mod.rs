mod derive_facets;
mod edit_place;
mod error;
mod filter_places;
mod merge_overlay;
mod query_catalog;
mod sort_places;


pub use self::{
    derive_facets::*, edit_place::*, error::Error, filter_places::*, merge_overlay::*,
    query_catalog::*, sort_places::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*};
}
use self::prelude::*;

/// Loads the persisted overlay, falling back to an empty one.
///
/// Local edits must never prevent the catalog from rendering, so
/// unreadable or corrupt overlay data is logged and discarded.
pub fn load_overlay_or_default<R: OverlayRepo>(repo: &R) -> Overlay {
    match repo.load_overlay() {
        Ok(overlay) => overlay,
        Err(err) => {
            log::warn!("Unable to load the edit overlay, starting empty: {err}");
            Overlay::default()
        }
    }
}

/// Persists the overlay without letting a failure bubble up.
/// The in-memory state stays authoritative either way.
pub fn store_overlay_best_effort<R: OverlayRepo>(repo: &R, overlay: &Overlay) {
    if let Err(err) = repo.save_overlay(overlay) {
        log::warn!("Unable to store the edit overlay: {err}");
    }
}
