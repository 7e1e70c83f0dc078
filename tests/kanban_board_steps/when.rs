//! When steps for kanban board BDD scenarios.

use super::world::BoardWorld;
use eyre::WrapErr;
use rstest_bdd_macros::when;

#[when(r#"the user adds a task titled "{title}""#)]
fn add_task(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    world.capture_snapshot()?;
    let outcome = world
        .service
        .add_task(title)
        .wrap_err("add task in scenario")?;
    world.last_add = Some(outcome);
    Ok(())
}

#[when(r#"the user moves task {index} from "{source}" to "{destination}""#)]
fn move_task(
    world: &mut BoardWorld,
    index: usize,
    source: String,
    destination: String,
) -> Result<(), eyre::Report> {
    world.capture_snapshot()?;
    let result = world.service.move_task(index, &source, &destination);
    world.last_move = Some(result);
    Ok(())
}
