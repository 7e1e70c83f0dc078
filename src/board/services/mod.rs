//! Application services for board state management.

mod board;
mod config;

pub use board::{
    AddTaskOutcome, BoardService, BoardServiceError, BoardServiceResult, MoveTaskRequest,
};
pub use config::{BoardConfig, BoardConfigError, SameColumnMove};
