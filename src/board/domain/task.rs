//! Task entity placed on the board.

use super::{TaskId, TaskTitle};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A unit of work shown as a card on the board.
///
/// Tasks are immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task stamped with the current clock time.
    #[must_use]
    pub fn new(id: TaskId, title: TaskTitle, clock: &impl Clock) -> Self {
        Self {
            id,
            title,
            created_at: clock.utc(),
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
