//! Rust library for email folder metadata management.
//!
//! The [`FolderRepository`] reads folders from a [`LocalStore`],
//! resolves their [`FolderType`] from the [`AccountConfig`], lists
//! them for display and updates their classification settings.

pub mod domain;
pub use domain::*;
