//! Tests for the drop contract.

use crate::board::{
    domain::ColumnId,
    drag::{DragItem, DropTarget},
    services::MoveTaskRequest,
};
use rstest::rstest;

#[rstest]
fn drop_on_other_column_yields_move_and_retags_item() {
    let mut item = DragItem::new(1, ColumnId::Todo);
    let target = DropTarget::new(ColumnId::Done);

    let request = target.accept(&mut item);

    assert_eq!(
        request,
        Some(MoveTaskRequest::new(1, ColumnId::Todo, ColumnId::Done))
    );
    assert_eq!(item.column(), ColumnId::Done);
    assert_eq!(item.index(), 1);
}

#[rstest]
#[case(ColumnId::Todo)]
#[case(ColumnId::InProgress)]
#[case(ColumnId::Done)]
fn drop_on_own_column_is_ignored(#[case] column: ColumnId) {
    let mut item = DragItem::new(0, column);
    let target = DropTarget::new(column);

    assert_eq!(target.accept(&mut item), None);
    assert_eq!(item, DragItem::new(0, column));
}

#[rstest]
fn repeated_drop_of_same_payload_moves_once() {
    let mut item = DragItem::new(0, ColumnId::Todo);
    let target = DropTarget::new(ColumnId::InProgress);

    assert!(target.accept(&mut item).is_some());
    assert!(target.accept(&mut item).is_none());
}
