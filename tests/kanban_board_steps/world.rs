//! Shared world state for kanban board BDD scenarios.

use std::sync::Arc;

use kanban_board::board::{
    adapters::memory::{InMemoryBoardStore, SequentialTaskIdGenerator},
    domain::Board,
    services::{AddTaskOutcome, BoardService, BoardServiceResult},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestBoardService =
    BoardService<InMemoryBoardStore, SequentialTaskIdGenerator, DefaultClock>;

/// Scenario world for kanban board behaviour tests.
pub struct BoardWorld {
    /// The board service under test.
    pub service: TestBoardService,
    /// Board captured immediately before the latest user action.
    pub snapshot: Option<Board>,
    /// Outcome of the latest add-task action.
    pub last_add: Option<AddTaskOutcome>,
    /// Result of the latest move-task action.
    pub last_move: Option<BoardServiceResult<Board>>,
}

impl BoardWorld {
    /// Creates a world holding an empty board.
    #[must_use]
    pub fn new() -> Self {
        let service = BoardService::new(
            Arc::new(InMemoryBoardStore::new()),
            Arc::new(SequentialTaskIdGenerator::new()),
            Arc::new(DefaultClock),
        );

        Self {
            service,
            snapshot: None,
            last_add: None,
            last_move: None,
        }
    }

    /// Records the current board so later steps can detect changes.
    pub fn capture_snapshot(&mut self) -> Result<(), eyre::Report> {
        self.snapshot = Some(self.service.board()?);
        Ok(())
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}
