//! Kanban board state kernel.
//!
//! This crate owns the state of a single-page kanban board: three fixed
//! columns, task creation in the to-do column, and movement of tasks between
//! columns. Rendering and drag gesture tracking belong to the caller, which
//! invokes the board service on discrete user actions and re-renders from the
//! returned board.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for state ownership and id minting
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`board`]: Board domain, services and the drop contract

pub mod board;
