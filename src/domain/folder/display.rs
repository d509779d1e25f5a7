//! Display folder module.
//!
//! This module contains the folders as shown in a folder list, and
//! the order they are shown in.

use serde::Serialize;
use std::{cmp::Reverse, ops};

use super::Folder;

/// Represents a folder of the folder list, along with its live
/// unread count.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DisplayFolder {
    pub folder: Folder,
    pub is_in_top_group: bool,
    /// Represents the number of messages not empty, not deleted and
    /// not read.
    pub unread_count: u64,
}

type SortKey = (
    Reverse<bool>,
    Reverse<bool>,
    Reverse<bool>,
    Reverse<bool>,
    String,
    String,
    i64,
);

impl DisplayFolder {
    /// Builds the key folder lists are sorted by: inbox first, then
    /// outbox, then other special folders, then top group folders,
    /// then case-insensitive name.
    ///
    /// Exact name and id end the key so that distinct folders never
    /// compare equal.
    fn sort_key(&self) -> SortKey {
        let kind = &self.folder.kind;
        (
            Reverse(kind.is_inbox()),
            Reverse(kind.is_outbox()),
            Reverse(kind.is_special()),
            Reverse(self.is_in_top_group),
            self.folder.name.to_lowercase(),
            self.folder.name.clone(),
            self.folder.id,
        )
    }
}

/// Represents the folder list.
#[derive(Debug, Default, PartialEq, Eq, Serialize)]
pub struct DisplayFolders(pub Vec<DisplayFolder>);

impl DisplayFolders {
    pub fn sort(&mut self) {
        self.0.sort_by_cached_key(DisplayFolder::sort_key)
    }
}

impl ops::Deref for DisplayFolders {
    type Target = Vec<DisplayFolder>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl ops::DerefMut for DisplayFolders {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl FromIterator<DisplayFolder> for DisplayFolders {
    fn from_iter<T: IntoIterator<Item = DisplayFolder>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
