//! Folder mode module.
//!
//! This module contains the folder mode, which selects folders by
//! class, and the SQL filter derived from it.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::{Error, FolderClass, Result};

/// Represents the folder selection criterion.
///
/// [`FolderMode::None`] is a sentinel meaning "no selection": it can
/// be stored in the account configuration (for example to disable
/// push) but must never be turned into a filter.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FolderMode {
    None,
    All,
    FirstClass,
    FirstAndSecondClass,
    NotSecondClass,
}

/// Represents a SQL predicate over a folder class column, with its
/// positional parameters.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClassFilter {
    pub clause: String,
    pub params: Vec<&'static str>,
}

impl FolderMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::All => "ALL",
            Self::FirstClass => "FIRST_CLASS",
            Self::FirstAndSecondClass => "FIRST_AND_SECOND_CLASS",
            Self::NotSecondClass => "NOT_SECOND_CLASS",
        }
    }

    /// Builds the filter selecting the rows whose `column` class
    /// matches the mode. Returns `None` when every row matches.
    ///
    /// A null class is treated as [`FolderClass::NoClass`].
    pub fn class_filter(&self, column: &str) -> Result<Option<ClassFilter>> {
        let class = format!("IFNULL({}, '{}')", column, FolderClass::NoClass);

        let filter = match self {
            Self::None => return Err(Error::InvalidFolderModeError),
            Self::All => None,
            Self::FirstClass => Some(ClassFilter {
                clause: format!("{} = ?", class),
                params: vec![FolderClass::FirstClass.as_str()],
            }),
            Self::FirstAndSecondClass => Some(ClassFilter {
                clause: format!("{} IN (?, ?)", class),
                params: vec![
                    FolderClass::FirstClass.as_str(),
                    FolderClass::SecondClass.as_str(),
                ],
            }),
            Self::NotSecondClass => Some(ClassFilter {
                clause: format!("{} != ?", class),
                params: vec![FolderClass::SecondClass.as_str()],
            }),
        };

        Ok(filter)
    }

    /// Checks if the given class is selected by the mode.
    pub fn accepts(&self, class: FolderClass) -> Result<bool> {
        match self {
            Self::None => Err(Error::InvalidFolderModeError),
            Self::All => Ok(true),
            Self::FirstClass => Ok(class == FolderClass::FirstClass),
            Self::FirstAndSecondClass => Ok(matches!(
                class,
                FolderClass::FirstClass | FolderClass::SecondClass
            )),
            Self::NotSecondClass => Ok(class != FolderClass::SecondClass),
        }
    }
}

impl FromStr for FolderMode {
    type Err = Error;

    fn from_str(mode: &str) -> Result<Self> {
        match mode {
            "NONE" => Ok(Self::None),
            "ALL" => Ok(Self::All),
            "FIRST_CLASS" => Ok(Self::FirstClass),
            "FIRST_AND_SECOND_CLASS" => Ok(Self::FirstAndSecondClass),
            "NOT_SECOND_CLASS" => Ok(Self::NotSecondClass),
            mode => Err(Error::ParseFolderModeError(mode.to_owned())),
        }
    }
}

impl fmt::Display for FolderMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
