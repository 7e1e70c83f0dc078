//! Store port owning the board state for a single session.

use crate::board::domain::Board;
use std::sync::Arc;
use thiserror::Error;

/// Result type for board store operations.
pub type BoardStoreResult<T> = Result<T, BoardStoreError>;

/// Owner of the current board state.
///
/// Services read a snapshot, mutate it and write it back only when the
/// mutation succeeded, so a store never observes a half-applied operation.
pub trait BoardStore: Send + Sync {
    /// Returns a snapshot of the current board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Persistence`] when the state cannot be read.
    fn load(&self) -> BoardStoreResult<Board>;

    /// Replaces the current board with `board`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Persistence`] when the state cannot be
    /// written.
    fn save(&self, board: &Board) -> BoardStoreResult<()>;
}

/// Errors returned by board store implementations.
#[derive(Debug, Clone, Error)]
pub enum BoardStoreError {
    /// Storage-layer failure.
    #[error("board store error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl BoardStoreError {
    /// Wraps a storage error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
