use thiserror::Error;

use crate::repositories;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The place does not exist")]
    PlaceDoesNotExist,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}
