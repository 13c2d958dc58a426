//! When steps for checklist progress BDD scenarios.

use super::world::{ChecklistWorld, actor, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use taskdesk::task::services::{UpdateChecklistItemRequest, UpdateStatusRequest};

fn mark_item(
    world: &mut ChecklistWorld,
    user: &str,
    position: usize,
    completed: bool,
) -> Result<(), eyre::Report> {
    let task_id = world.task()?.id();
    let item_id = world.item_at(position)?;
    let updated = run_async(world.service.update_checklist_item(
        &actor(user)?,
        UpdateChecklistItemRequest::new(task_id, item_id, completed),
    ))
    .wrap_err("toggle checklist item")?;
    world.task = Some(updated);
    Ok(())
}

#[when(r#""{user}" marks checklist item {position} as done"#)]
fn marks_item_done(
    world: &mut ChecklistWorld,
    user: String,
    position: usize,
) -> Result<(), eyre::Report> {
    mark_item(world, &user, position, true)
}

#[when(r#""{user}" marks checklist item {position} as not done"#)]
fn marks_item_not_done(
    world: &mut ChecklistWorld,
    user: String,
    position: usize,
) -> Result<(), eyre::Report> {
    mark_item(world, &user, position, false)
}

#[when(r#""{user}" sets the task status to "{status}""#)]
fn sets_status(
    world: &mut ChecklistWorld,
    user: String,
    status: String,
) -> Result<(), eyre::Report> {
    let task_id = world.task()?.id();
    let updated = run_async(
        world
            .service
            .update_status(&actor(&user)?, UpdateStatusRequest::new(task_id, status)),
    )
    .wrap_err("set task status")?;
    world.task = Some(updated);
    Ok(())
}
