//! Kanban board state management.
//!
//! The board holds three fixed columns (`todo`, `inProgress`, `done`). Tasks
//! are created at the end of `todo` and moved between columns one at a time.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//! - The drag-and-drop drop contract in [`drag`]

pub mod adapters;
pub mod domain;
pub mod drag;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
