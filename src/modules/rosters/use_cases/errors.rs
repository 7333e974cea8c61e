use crate::modules::rosters::adapters::outbound::driver_directory::DirectoryError;
use crate::modules::rosters::adapters::outbound::roster_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("no authenticated actor")]
    Unauthenticated,

    #[error("domain rejected: {0}")]
    Domain(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Directory(#[from] DirectoryError),
}
