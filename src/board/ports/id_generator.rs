//! Port for minting task identifiers.

use crate::board::domain::TaskId;

/// Source of fresh task identifiers.
///
/// Every call must return an identifier that no earlier call on the same
/// generator returned, including calls made within the same instant.
#[cfg_attr(test, mockall::automock)]
pub trait TaskIdGenerator: Send + Sync {
    /// Returns the next unused identifier.
    fn next_id(&self) -> TaskId;
}
