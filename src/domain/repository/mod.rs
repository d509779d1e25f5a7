//! Repository module.
//!
//! This module contains the local store of folders and the folder
//! repository built on top of it.

mod error;
pub use error::{Error, Result};

pub mod repository;
pub use repository::*;

pub mod store;
pub use store::*;
