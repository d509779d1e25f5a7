use rusqlite;
use std::result;
use thiserror::Error;

use crate::folder;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot find folder by server id {0}")]
    FindFolderByServerIdError(String),

    #[error(transparent)]
    FolderError(#[from] folder::Error),
    #[error(transparent)]
    StoreError(#[from] rusqlite::Error),
}

pub type Result<T> = result::Result<T, Error>;
