//! In-memory adapters for board state and identifier generation.

mod id_generator;
mod store;

pub use id_generator::{SequentialTaskIdGenerator, UuidTaskIdGenerator};
pub use store::InMemoryBoardStore;
