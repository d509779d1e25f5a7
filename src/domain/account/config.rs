//! Account config module.
//!
//! This module contains the representation of the configuration of
//! the user account, restricted to what folder listing needs.

use serde::Deserialize;

use crate::{FolderMode, FolderType};

pub const DEFAULT_FOLDER_DISPLAY_MODE: FolderMode = FolderMode::NotSecondClass;
pub const DEFAULT_FOLDER_PUSH_MODE: FolderMode = FolderMode::FirstClass;

/// Represents the configuration of the user account.
#[derive(Debug, Default, Clone, Eq, PartialEq, Deserialize)]
#[serde(default)]
pub struct AccountConfig {
    /// Represents the name of the account.
    pub name: String,

    /// Represents the server id of the inbox folder.
    pub inbox_folder: Option<String>,
    /// Represents the server id of the local outbox folder.
    pub outbox_folder: Option<String>,
    pub sent_folder: Option<String>,
    pub trash_folder: Option<String>,
    pub drafts_folder: Option<String>,
    pub archive_folder: Option<String>,
    pub spam_folder: Option<String>,

    /// Represents the mode used when listing folders without an
    /// explicit one.
    pub folder_display_mode: Option<FolderMode>,
    /// Represents the mode selecting folders to push. The
    /// [`FolderMode::None`] mode disables push.
    pub folder_push_mode: Option<FolderMode>,
}

impl AccountConfig {
    pub fn folder_display_mode(&self) -> FolderMode {
        self.folder_display_mode
            .unwrap_or(DEFAULT_FOLDER_DISPLAY_MODE)
    }

    pub fn folder_push_mode(&self) -> FolderMode {
        self.folder_push_mode.unwrap_or(DEFAULT_FOLDER_PUSH_MODE)
    }

    /// Lists the configured special folders, by role priority.
    fn special_folders(&self) -> [(FolderType, Option<&str>); 7] {
        [
            (FolderType::Inbox, self.inbox_folder.as_deref()),
            (FolderType::Outbox, self.outbox_folder.as_deref()),
            (FolderType::Sent, self.sent_folder.as_deref()),
            (FolderType::Trash, self.trash_folder.as_deref()),
            (FolderType::Drafts, self.drafts_folder.as_deref()),
            (FolderType::Archive, self.archive_folder.as_deref()),
            (FolderType::Spam, self.spam_folder.as_deref()),
        ]
    }

    /// Resolves the type of the folder matching the given server id.
    ///
    /// When the same server id is configured for several roles, the
    /// first role of the priority order wins.
    pub fn folder_type(&self, server_id: &str) -> FolderType {
        self.special_folders()
            .into_iter()
            .find(|(_, special)| *special == Some(server_id))
            .map(|(kind, _)| kind)
            .unwrap_or_default()
    }
}
