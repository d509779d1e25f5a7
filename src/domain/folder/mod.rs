//! Folder module.
//!
//! This module contains everything related to email folders: their
//! semantic role, their classification and the way they are listed.

mod error;
pub use error::{Error, Result};

pub mod class;
pub use class::*;

pub mod details;
pub use details::*;

pub mod display;
pub use display::*;

pub mod folder;
pub use folder::*;

pub mod folders;
pub use folders::*;

pub mod mode;
pub use mode::*;
