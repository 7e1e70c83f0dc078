//! Then steps for kanban board BDD scenarios.

use super::world::BoardWorld;
use kanban_board::board::{
    domain::{BoardDomainError, ColumnId},
    services::BoardServiceError,
};
use rstest_bdd_macros::then;

fn parse_column(column: &str) -> Result<ColumnId, eyre::Report> {
    ColumnId::try_from(column).map_err(|err| eyre::eyre!("invalid column in scenario: {err}"))
}

#[then(r#"the number of tasks in "{column}" is {count}"#)]
fn column_task_count(
    world: &BoardWorld,
    column: String,
    count: usize,
) -> Result<(), eyre::Report> {
    let column_id = parse_column(&column)?;
    let board = world.service.board()?;
    let actual = board.column(column_id).len();
    if actual != count {
        return Err(eyre::eyre!(
            "expected {count} tasks in {column}, found {actual}"
        ));
    }
    Ok(())
}

#[then(r#"task {index} in "{column}" is titled "{title}""#)]
fn task_title_at(
    world: &BoardWorld,
    index: usize,
    column: String,
    title: String,
) -> Result<(), eyre::Report> {
    let column_id = parse_column(&column)?;
    let board = world.service.board()?;
    let task = board
        .task_at(column_id, index)
        .map_err(|err| eyre::eyre!("missing task: {err}"))?;
    if task.title().as_str() != title {
        return Err(eyre::eyre!(
            "expected task {index} in {column} to be titled {title:?}, found {:?}",
            task.title().as_str()
        ));
    }
    Ok(())
}

#[then("the board is unchanged")]
fn board_unchanged(world: &BoardWorld) -> Result<(), eyre::Report> {
    let before = world
        .snapshot
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing board snapshot"))?;
    let after = world.service.board()?;
    if &after != before {
        return Err(eyre::eyre!("board changed: {before:?} -> {after:?}"));
    }
    Ok(())
}

#[then("the title input is cleared")]
fn title_input_cleared(world: &BoardWorld) -> Result<(), eyre::Report> {
    let outcome = world
        .last_add
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing add-task outcome"))?;
    if !outcome.clears_input() {
        return Err(eyre::eyre!("expected the input to be cleared"));
    }
    Ok(())
}

#[then("the title input is kept")]
fn title_input_kept(world: &BoardWorld) -> Result<(), eyre::Report> {
    let outcome = world
        .last_add
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing add-task outcome"))?;
    if outcome.clears_input() {
        return Err(eyre::eyre!("expected the input to be kept"));
    }
    Ok(())
}

#[then("the move fails with an invalid column error")]
fn move_fails_with_invalid_column(world: &BoardWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_move
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing move result"))?;
    if !matches!(
        result,
        Err(BoardServiceError::Domain(BoardDomainError::InvalidColumn(_)))
    ) {
        return Err(eyre::eyre!("expected InvalidColumn error, got {result:?}"));
    }
    Ok(())
}

#[then("the move fails with an invalid index error")]
fn move_fails_with_invalid_index(world: &BoardWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_move
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing move result"))?;
    if !matches!(
        result,
        Err(BoardServiceError::Domain(BoardDomainError::InvalidIndex { .. }))
    ) {
        return Err(eyre::eyre!("expected InvalidIndex error, got {result:?}"));
    }
    Ok(())
}
