//! The fixed set of board columns.

use super::ParseColumnIdError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of one of the three fixed board columns.
///
/// The set is closed: there is no way to add, remove or rename columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColumnId {
    /// Work that has not started. New tasks always land here.
    Todo,
    /// Work that is underway.
    InProgress,
    /// Finished work.
    Done,
}

impl ColumnId {
    /// All columns in display order.
    pub const ALL: [Self; 3] = [Self::Todo, Self::InProgress, Self::Done];

    /// Returns the identifier used in drag payloads and serialized boards.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "inProgress",
            Self::Done => "done",
        }
    }

    /// Returns the heading shown above the column.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Todo => "TO DO",
            Self::InProgress => "IN PROGRESS",
            Self::Done => "DONE",
        }
    }
}

impl TryFrom<&str> for ColumnId {
    type Error = ParseColumnIdError;

    /// Parses a column identifier. Matching is exact: `inprogress` and
    /// ` todo` are rejected.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "todo" => Ok(Self::Todo),
            "inProgress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            _ => Err(ParseColumnIdError(value.to_owned())),
        }
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
