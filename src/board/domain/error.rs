//! Error types for board domain validation and parsing.

use super::{ColumnId, TaskId};
use thiserror::Error;

/// Errors returned while constructing or mutating board domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The column identifier is not one of `todo`, `inProgress` or `done`.
    #[error("invalid column id: {0}")]
    InvalidColumn(String),

    /// The task index does not address a task in the column.
    #[error("task index {index} is out of range for column {column} holding {len} tasks")]
    InvalidIndex {
        /// Column the index was applied to.
        column: ColumnId,
        /// Requested position.
        index: usize,
        /// Number of tasks in the column at the time of the request.
        len: usize,
    },

    /// A task with the same identifier is already on the board.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),
}

/// Error returned while parsing a column identifier.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown column id: {0}")]
pub struct ParseColumnIdError(pub String);

impl From<ParseColumnIdError> for BoardDomainError {
    fn from(err: ParseColumnIdError) -> Self {
        Self::InvalidColumn(err.0)
    }
}
