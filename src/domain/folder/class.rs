//! Folder class module.
//!
//! This module contains the representation of the folder class, used
//! to gate synchronization, display, notification and push of a
//! folder.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::{Error, Result};

/// Represents the folder class.
///
/// The same enumeration is used independently for the sync class,
/// the display class, the notify class and the push class of a
/// folder. It is persisted by name.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FolderClass {
    #[default]
    NoClass,
    Inherited,
    FirstClass,
    SecondClass,
}

impl FolderClass {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NoClass => "NO_CLASS",
            Self::Inherited => "INHERITED",
            Self::FirstClass => "FIRST_CLASS",
            Self::SecondClass => "SECOND_CLASS",
        }
    }

    /// Parses a persisted folder class.
    ///
    /// A missing value defaults to [`FolderClass::NoClass`], whereas
    /// an unknown value is considered as corrupted data and fails.
    pub fn from_stored(class: Option<&str>) -> Result<Self> {
        match class {
            None => Ok(Self::default()),
            Some(class) => class.parse(),
        }
    }
}

impl FromStr for FolderClass {
    type Err = Error;

    fn from_str(class: &str) -> Result<Self> {
        match class {
            "NO_CLASS" => Ok(Self::NoClass),
            "INHERITED" => Ok(Self::Inherited),
            "FIRST_CLASS" => Ok(Self::FirstClass),
            "SECOND_CLASS" => Ok(Self::SecondClass),
            class => Err(Error::ParseFolderClassError(class.to_owned())),
        }
    }
}

impl fmt::Display for FolderClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
