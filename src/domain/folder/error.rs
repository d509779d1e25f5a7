use std::result;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot parse folder class {0}")]
    ParseFolderClassError(String),
    #[error("cannot parse folder mode {0}")]
    ParseFolderModeError(String),
    #[error("cannot parse folder type {0}")]
    ParseFolderTypeError(String),
    #[error("cannot build folder filter from the none folder mode")]
    InvalidFolderModeError,
}

pub type Result<T> = result::Result<T, Error>;
