//! Service layer for board mutations.

use crate::board::{
    domain::{Board, BoardDomainError, ColumnId, Task, TaskTitle},
    ports::{BoardStore, BoardStoreError, TaskIdGenerator},
    services::{BoardConfig, SameColumnMove},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, warn};

/// Request payload for moving a task between columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveTaskRequest {
    /// Position of the task in the source column.
    pub index: usize,
    /// Column the task currently belongs to.
    pub source: ColumnId,
    /// Column the task is appended to.
    pub destination: ColumnId,
}

impl MoveTaskRequest {
    /// Creates a move request from parsed column identifiers.
    #[must_use]
    pub const fn new(index: usize, source: ColumnId, destination: ColumnId) -> Self {
        Self {
            index,
            source,
            destination,
        }
    }

    /// Creates a move request from raw column identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidColumn`] naming the first
    /// identifier that is not a known column.
    pub fn parse(index: usize, source: &str, destination: &str) -> Result<Self, BoardDomainError> {
        Ok(Self::new(
            index,
            ColumnId::try_from(source)?,
            ColumnId::try_from(destination)?,
        ))
    }
}

/// Result of an add-task call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddTaskOutcome {
    /// A task was created at the end of the `todo` column.
    Added {
        /// The new task.
        task: Task,
        /// Board after the task was added.
        board: Board,
    },
    /// The title was blank, so nothing changed.
    Ignored {
        /// The unchanged board.
        board: Board,
    },
}

impl AddTaskOutcome {
    /// Returns the board after the call.
    #[must_use]
    pub const fn board(&self) -> &Board {
        match self {
            Self::Added { board, .. } | Self::Ignored { board } => board,
        }
    }

    /// Consumes the outcome, returning the board after the call.
    #[must_use]
    pub fn into_board(self) -> Board {
        match self {
            Self::Added { board, .. } | Self::Ignored { board } => board,
        }
    }

    /// Returns the created task, if any.
    #[must_use]
    pub const fn task(&self) -> Option<&Task> {
        match self {
            Self::Added { task, .. } => Some(task),
            Self::Ignored { .. } => None,
        }
    }

    /// Returns `true` when the caller should clear its title input.
    #[must_use]
    pub const fn clears_input(&self) -> bool {
        matches!(self, Self::Added { .. })
    }
}

/// Service-level errors for board operations.
#[derive(Debug, Error)]
pub enum BoardServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
    /// Store operation failed.
    #[error(transparent)]
    Store(#[from] BoardStoreError),
}

/// Result type for board service operations.
pub type BoardServiceResult<T> = Result<T, BoardServiceError>;

/// Board state manager.
///
/// All board mutations go through [`BoardService::add_task`] and
/// [`BoardService::move_task`]. Rejected operations leave the stored board
/// untouched and are logged before the error is returned.
#[derive(Clone)]
pub struct BoardService<S, G, C>
where
    S: BoardStore,
    G: TaskIdGenerator,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    ids: Arc<G>,
    clock: Arc<C>,
    config: BoardConfig,
}

impl<S, G, C> BoardService<S, G, C>
where
    S: BoardStore,
    G: TaskIdGenerator,
    C: Clock + Send + Sync,
{
    /// Creates a board service with default configuration.
    #[must_use]
    pub fn new(store: Arc<S>, ids: Arc<G>, clock: Arc<C>) -> Self {
        Self::with_config(store, ids, clock, BoardConfig::default())
    }

    /// Creates a board service with custom configuration.
    #[must_use]
    pub const fn with_config(
        store: Arc<S>,
        ids: Arc<G>,
        clock: Arc<C>,
        config: BoardConfig,
    ) -> Self {
        Self {
            store,
            ids,
            clock,
            config,
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Returns a snapshot of the current board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Store`] when the store cannot be read.
    pub fn board(&self) -> BoardServiceResult<Board> {
        self.store.load().map_err(rejected)
    }

    /// Adds a task with the given title to the end of the `todo` column.
    ///
    /// A blank or whitespace-only title is not an error: the board is
    /// returned unchanged as [`AddTaskOutcome::Ignored`].
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Domain`] when the generated identifier
    /// collides with an existing task, or [`BoardServiceError::Store`] when
    /// the store fails.
    pub fn add_task(&self, title: impl Into<String>) -> BoardServiceResult<AddTaskOutcome> {
        let raw = title.into();
        let mut board = self.store.load().map_err(rejected)?;
        let candidate = if self.config.trim_titles {
            raw.trim().to_owned()
        } else {
            raw
        };

        let Ok(task_title) = TaskTitle::new(candidate) else {
            debug!("ignored add-task request with blank title");
            return Ok(AddTaskOutcome::Ignored { board });
        };

        let task = Task::new(self.ids.next_id(), task_title, &*self.clock);
        board.add_task(task.clone()).map_err(rejected)?;
        self.store.save(&board).map_err(rejected)?;
        debug!(task_id = %task.id(), "added task to todo");
        Ok(AddTaskOutcome::Added { task, board })
    }

    /// Moves a task between columns named by raw identifiers.
    ///
    /// The task at `index` in `source` is removed and appended to the end
    /// of `destination`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidColumn`] when either identifier is
    /// not a known column, [`BoardDomainError::InvalidIndex`] when `index`
    /// is out of range, or [`BoardServiceError::Store`] when the store
    /// fails. The board is unchanged in every error case.
    pub fn move_task(
        &self,
        index: usize,
        source: &str,
        destination: &str,
    ) -> BoardServiceResult<Board> {
        let request = MoveTaskRequest::parse(index, source, destination).map_err(rejected)?;
        self.move_task_between(request)
    }

    /// Moves a task between already-parsed columns.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidIndex`] when the index is out of
    /// range, or [`BoardServiceError::Store`] when the store fails.
    pub fn move_task_between(&self, request: MoveTaskRequest) -> BoardServiceResult<Board> {
        let MoveTaskRequest {
            index,
            source,
            destination,
        } = request;
        let mut board = self.store.load().map_err(rejected)?;

        if source == destination && self.config.same_column_move == SameColumnMove::Ignore {
            board.task_at(source, index).map_err(rejected)?;
            debug!(column = %source, index, "ignored same-column move");
            return Ok(board);
        }

        let task_id = board
            .move_task(index, source, destination)
            .map_err(rejected)?;
        self.store.save(&board).map_err(rejected)?;
        debug!(%task_id, from = %source, to = %destination, "moved task");
        Ok(board)
    }
}

/// Logs a rejected operation and converts the cause into a service error.
fn rejected(cause: impl Into<BoardServiceError>) -> BoardServiceError {
    let err = cause.into();
    match &err {
        BoardServiceError::Domain(BoardDomainError::InvalidColumn(column)) => {
            error!(%column, "rejected move: {err}");
        }
        BoardServiceError::Domain(BoardDomainError::InvalidIndex { column, index, len }) => {
            warn!(%column, index, len, "rejected move: {err}");
        }
        BoardServiceError::Domain(_) | BoardServiceError::Store(_) => {
            error!("board operation failed: {err}");
        }
    }
    err
}
