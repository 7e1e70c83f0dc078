//! Board aggregate: the three columns and their ordered task sequences.

use super::{BoardDomainError, ColumnId, Task, TaskId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Kanban board state.
///
/// Every task sits in exactly one column, and task identifiers are unique
/// across the whole board. Both properties hold for every value reachable
/// through the public API, including deserialized boards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "BoardColumns")]
pub struct Board {
    todo: Vec<Task>,
    in_progress: Vec<Task>,
    done: Vec<Task>,
}

/// Unchecked column contents, validated into a [`Board`] on deserialization.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BoardColumns {
    #[serde(default)]
    todo: Vec<Task>,
    #[serde(default)]
    in_progress: Vec<Task>,
    #[serde(default)]
    done: Vec<Task>,
}

impl TryFrom<BoardColumns> for Board {
    type Error = BoardDomainError;

    fn try_from(columns: BoardColumns) -> Result<Self, Self::Error> {
        let mut seen = HashSet::new();
        let all = columns
            .todo
            .iter()
            .chain(&columns.in_progress)
            .chain(&columns.done);
        for task in all {
            if !seen.insert(task.id()) {
                return Err(BoardDomainError::DuplicateTask(task.id()));
            }
        }

        Ok(Self {
            todo: columns.todo,
            in_progress: columns.in_progress,
            done: columns.done,
        })
    }
}

impl Board {
    /// Creates a board with three empty columns.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            todo: Vec::new(),
            in_progress: Vec::new(),
            done: Vec::new(),
        }
    }

    /// Returns the tasks of a column in display order.
    #[must_use]
    pub fn column(&self, column: ColumnId) -> &[Task] {
        match column {
            ColumnId::Todo => &self.todo,
            ColumnId::InProgress => &self.in_progress,
            ColumnId::Done => &self.done,
        }
    }

    const fn column_mut(&mut self, column: ColumnId) -> &mut Vec<Task> {
        match column {
            ColumnId::Todo => &mut self.todo,
            ColumnId::InProgress => &mut self.in_progress,
            ColumnId::Done => &mut self.done,
        }
    }

    /// Iterates over all columns in display order.
    pub fn columns(&self) -> impl Iterator<Item = (ColumnId, &[Task])> {
        ColumnId::ALL
            .into_iter()
            .map(move |column| (column, self.column(column)))
    }

    /// Returns the total number of tasks on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.todo.len() + self.in_progress.len() + self.done.len()
    }

    /// Returns `true` when no column holds a task.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the column and position of a task, if it is on the board.
    #[must_use]
    pub fn locate(&self, id: TaskId) -> Option<(ColumnId, usize)> {
        self.columns().find_map(|(column, tasks)| {
            tasks
                .iter()
                .position(|task| task.id() == id)
                .map(|index| (column, index))
        })
    }

    /// Returns `true` when a task with the identifier is on the board.
    #[must_use]
    pub fn contains(&self, id: TaskId) -> bool {
        self.locate(id).is_some()
    }

    /// Returns the task at `index` in `column`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidIndex`] when the column holds no
    /// task at that position.
    pub fn task_at(&self, column: ColumnId, index: usize) -> Result<&Task, BoardDomainError> {
        let tasks = self.column(column);
        tasks.get(index).ok_or(BoardDomainError::InvalidIndex {
            column,
            index,
            len: tasks.len(),
        })
    }

    /// Appends a new task to the end of the `todo` column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::DuplicateTask`] when a task with the same
    /// identifier is already on the board. The board is left unchanged.
    pub fn add_task(&mut self, task: Task) -> Result<(), BoardDomainError> {
        if self.contains(task.id()) {
            return Err(BoardDomainError::DuplicateTask(task.id()));
        }
        self.todo.push(task);
        Ok(())
    }

    /// Moves the task at `index` in `source` to the end of `destination`.
    ///
    /// When `source` and `destination` are the same column the task is
    /// requeued at the end of that column. Returns the moved task's
    /// identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidIndex`] when `index` is out of
    /// range for `source`. The board is left unchanged.
    pub fn move_task(
        &mut self,
        index: usize,
        source: ColumnId,
        destination: ColumnId,
    ) -> Result<TaskId, BoardDomainError> {
        self.task_at(source, index)?;
        let task = self.column_mut(source).remove(index);
        let id = task.id();
        self.column_mut(destination).push(task);
        Ok(id)
    }
}
