//! Unit tests for the board module.

mod drag_tests;
mod support;
