//! Given steps for kanban board BDD scenarios.

use super::world::BoardWorld;
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given("an empty board")]
fn empty_board(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let board = world.service.board().wrap_err("read initial board")?;
    if !board.is_empty() {
        return Err(eyre::eyre!("expected an empty board, found {} tasks", board.len()));
    }
    Ok(())
}

#[given(r#"a board with a task titled "{title}""#)]
fn board_with_task(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    let outcome = world
        .service
        .add_task(title)
        .wrap_err("seed task for scenario")?;
    if outcome.task().is_none() {
        return Err(eyre::eyre!("seed task title was rejected"));
    }
    Ok(())
}
