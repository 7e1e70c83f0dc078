//! In-memory board store.

use std::sync::{Arc, RwLock};

use crate::board::{
    domain::Board,
    ports::{BoardStore, BoardStoreError, BoardStoreResult},
};

/// Thread-safe in-memory board store.
///
/// Clones share the same underlying board, so a clone acts as a handle to
/// the session's state.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBoardStore {
    state: Arc<RwLock<Board>>,
}

impl InMemoryBoardStore {
    /// Creates a store holding an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with an existing board.
    #[must_use]
    pub fn with_board(board: Board) -> Self {
        Self {
            state: Arc::new(RwLock::new(board)),
        }
    }
}

impl BoardStore for InMemoryBoardStore {
    fn load(&self) -> BoardStoreResult<Board> {
        let state = self.state.read().map_err(|err| {
            BoardStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.clone())
    }

    fn save(&self, board: &Board) -> BoardStoreResult<()> {
        let mut state = self.state.write().map_err(|err| {
            BoardStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        state.clone_from(board);
        Ok(())
    }
}
