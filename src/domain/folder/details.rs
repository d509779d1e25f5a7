//! Folder details module.
//!
//! This module contains the classification settings of a folder.

use serde::Serialize;

use super::{Folder, FolderClass};

/// Represents a folder along with its classification settings.
///
/// Details are read on demand from the store and never cached: each
/// read reflects the current state of the store.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FolderDetails {
    pub folder: Folder,
    /// Represents the user pin to the top group.
    pub is_in_top_group: bool,
    /// Represents the inclusion in the unified inbox.
    pub is_integrate: bool,
    pub sync_class: FolderClass,
    pub display_class: FolderClass,
    pub notify_class: FolderClass,
    pub push_class: FolderClass,
}
