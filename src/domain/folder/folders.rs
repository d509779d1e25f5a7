//! Folders module.
//!
//! This module contains the representation of the email folders.

use std::ops;

use serde::Serialize;

use crate::Folder;

/// Represents the list of folders.
#[derive(Debug, Default, PartialEq, Eq, Serialize)]
pub struct Folders(pub Vec<Folder>);

impl Folders {
    /// Sorts folders by case-insensitive name, then by id.
    pub fn sort_by_name(&mut self) {
        self.0
            .sort_by_cached_key(|folder| (folder.name.to_lowercase(), folder.id));
    }
}

impl ops::Deref for Folders {
    type Target = Vec<Folder>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl ops::DerefMut for Folders {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl FromIterator<Folder> for Folders {
    fn from_iter<T: IntoIterator<Item = Folder>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
