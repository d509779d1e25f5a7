//! Folder module.
//!
//! This module contains the representation of the email folder and
//! of its semantic role.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::{Error, Result};

/// Represents the semantic role of a folder.
///
/// The type is never persisted: it is always derived from the
/// special folders configured for the account.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FolderType {
    #[default]
    Regular,
    Inbox,
    Outbox,
    Sent,
    Trash,
    Drafts,
    Archive,
    Spam,
}

impl FolderType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Regular => "REGULAR",
            Self::Inbox => "INBOX",
            Self::Outbox => "OUTBOX",
            Self::Sent => "SENT",
            Self::Trash => "TRASH",
            Self::Drafts => "DRAFTS",
            Self::Archive => "ARCHIVE",
            Self::Spam => "SPAM",
        }
    }

    pub fn is_inbox(&self) -> bool {
        matches!(self, Self::Inbox)
    }

    pub fn is_outbox(&self) -> bool {
        matches!(self, Self::Outbox)
    }

    /// Returns `true` for any type other than [`FolderType::Regular`].
    pub fn is_special(&self) -> bool {
        !matches!(self, Self::Regular)
    }
}

impl FromStr for FolderType {
    type Err = Error;

    fn from_str(kind: &str) -> Result<Self> {
        match kind {
            "REGULAR" => Ok(Self::Regular),
            "INBOX" => Ok(Self::Inbox),
            "OUTBOX" => Ok(Self::Outbox),
            "SENT" => Ok(Self::Sent),
            "TRASH" => Ok(Self::Trash),
            "DRAFTS" => Ok(Self::Drafts),
            "ARCHIVE" => Ok(Self::Archive),
            "SPAM" => Ok(Self::Spam),
            kind => Err(Error::ParseFolderTypeError(kind.to_owned())),
        }
    }
}

impl fmt::Display for FolderType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Represents the folder type as declared by the remote server.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RemoteFolderType {
    #[default]
    Regular,
    Inbox,
    Outbox,
    Drafts,
    Sent,
    Trash,
    Spam,
    Archive,
}

impl From<RemoteFolderType> for FolderType {
    fn from(kind: RemoteFolderType) -> Self {
        match kind {
            RemoteFolderType::Regular => Self::Regular,
            RemoteFolderType::Inbox => Self::Inbox,
            // outbox is a local concept, servers cannot own one
            RemoteFolderType::Outbox => Self::Regular,
            RemoteFolderType::Drafts => Self::Drafts,
            RemoteFolderType::Sent => Self::Sent,
            RemoteFolderType::Trash => Self::Trash,
            RemoteFolderType::Spam => Self::Spam,
            RemoteFolderType::Archive => Self::Archive,
        }
    }
}

/// Represents the folder.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Folder {
    /// Represents the local folder identifier, stable across renames.
    pub id: i64,
    /// Represents the folder identifier on the server side.
    pub server_id: String,
    /// Represents the folder display name.
    pub name: String,
    /// Represents the folder semantic role.
    pub kind: FolderType,
}

impl fmt::Display for Folder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Represents a folder as advertised by the remote server.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RemoteFolder {
    pub id: i64,
    pub server_id: String,
    pub name: String,
    pub kind: RemoteFolderType,
}

impl From<RemoteFolder> for Folder {
    fn from(folder: RemoteFolder) -> Self {
        Self {
            id: folder.id,
            server_id: folder.server_id,
            name: folder.name,
            kind: folder.kind.into(),
        }
    }
}
