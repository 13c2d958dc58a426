//! When steps for task authorization BDD scenarios.

use super::world::{AuthorizationWorld, actor, run_async};
use rstest_bdd_macros::when;
use taskdesk::task::services::{CreateTaskRequest, UpdateStatusRequest};

#[when(r#""{user}" sets the task status to "{status}""#)]
fn sets_status(
    world: &mut AuthorizationWorld,
    user: String,
    status: String,
) -> Result<(), eyre::Report> {
    let request = UpdateStatusRequest::new(world.task_id()?, status);
    let outcome = run_async(world.service.update_status(&actor(&user)?, request));
    world.record(outcome.map(Some));
    Ok(())
}

#[when(r#""{user}" creates a task titled "{title}""#)]
fn creates_task(
    world: &mut AuthorizationWorld,
    user: String,
    title: String,
) -> Result<(), eyre::Report> {
    let request = CreateTaskRequest::new(title, ["alice"]);
    let outcome = run_async(world.service.create_task(&actor(&user)?, request));
    world.record(outcome.map(Some));
    Ok(())
}

#[when(r#""{user}" deletes the task"#)]
fn deletes_task(world: &mut AuthorizationWorld, user: String) -> Result<(), eyre::Report> {
    let task_id = world.task_id()?;
    let outcome = run_async(world.service.delete_task(&actor(&user)?, task_id));
    world.record(outcome.map(|()| None));
    Ok(())
}
