// Low-level storage access traits.
// The base dataset is read-only, the overlay is the only
// entity that is ever written back.

use std::io;

use thiserror::Error;

use crate::entities::*;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait PlaceRepo {
    fn all_places(&self) -> Result<Vec<Place>>;

    fn count_places(&self) -> Result<usize> {
        Ok(self.all_places()?.len())
    }

    fn get_place(&self, id: &str) -> Result<Place> {
        self.all_places()?
            .into_iter()
            .find(|place| place.id.as_str() == id)
            .ok_or(Error::NotFound)
    }
}

pub trait OverlayRepo {
    fn load_overlay(&self) -> Result<Overlay>;
    fn save_overlay(&self, overlay: &Overlay) -> Result<()>;
}
