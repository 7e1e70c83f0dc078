//! Port contracts for board state management.
//!
//! Ports define infrastructure-agnostic interfaces used by board services.

pub mod id_generator;
pub mod store;

pub use id_generator::TaskIdGenerator;
pub use store::{BoardStore, BoardStoreError, BoardStoreResult};
