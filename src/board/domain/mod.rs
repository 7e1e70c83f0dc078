//! Domain model for the kanban board.
//!
//! The board domain models tasks, the fixed column set and the two permitted
//! board mutations while keeping state ownership and logging outside of the
//! domain boundary.

mod board;
mod column;
mod error;
mod ids;
mod task;

pub use board::Board;
pub use column::ColumnId;
pub use error::{BoardDomainError, ParseColumnIdError};
pub use ids::{TaskId, TaskTitle};
pub use task::Task;
