//! Drop contract between a drag-and-drop front end and the board service.
//!
//! A card being dragged carries a [`DragItem`]; a column accepting drops is
//! a [`DropTarget`]. Only the finished drop matters here: pointer tracking
//! and highlighting stay with the front end.

use crate::board::{domain::ColumnId, services::MoveTaskRequest};

/// Payload carried by a card while it is dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragItem {
    index: usize,
    column: ColumnId,
}

impl DragItem {
    /// Creates the payload for the card at `index` in `column`.
    #[must_use]
    pub const fn new(index: usize, column: ColumnId) -> Self {
        Self { index, column }
    }

    /// Returns the card's position in its column when the drag started.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the column the card currently belongs to.
    #[must_use]
    pub const fn column(&self) -> ColumnId {
        self.column
    }
}

/// A column that accepts dropped cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropTarget {
    column: ColumnId,
}

impl DropTarget {
    /// Creates a drop target for `column`.
    #[must_use]
    pub const fn new(column: ColumnId) -> Self {
        Self { column }
    }

    /// Returns the target column.
    #[must_use]
    pub const fn column(&self) -> ColumnId {
        self.column
    }

    /// Accepts a dropped card.
    ///
    /// Returns `None` when the card already belongs to this column. Otherwise
    /// returns the move to apply and re-tags `item` with this column, so a
    /// second drop of the same payload onto this column is a no-op.
    pub fn accept(&self, item: &mut DragItem) -> Option<MoveTaskRequest> {
        if item.column == self.column {
            return None;
        }
        let request = MoveTaskRequest::new(item.index, item.column, self.column);
        item.column = self.column;
        Some(request)
    }
}
