//! Given steps for checklist progress BDD scenarios.

use super::world::{ChecklistWorld, actor, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskdesk::task::{
    domain::ChecklistItemDraft,
    services::{CreateTaskRequest, UpdateStatusRequest},
};

#[given(r#"a task assigned to "{assignee}" with {count} open checklist items"#)]
fn task_with_open_items(
    world: &mut ChecklistWorld,
    assignee: String,
    count: usize,
) -> Result<(), eyre::Report> {
    let items = (1..=count).map(|n| ChecklistItemDraft::new(format!("step {n}")));
    let request = CreateTaskRequest::new("Checklist scenario", [assignee]).with_checklist(items);
    let created = run_async(world.service.create_task(&actor("lead")?, request))
        .wrap_err("create task for checklist scenario")?;
    world.task = Some(created);
    Ok(())
}

#[given(r#"the task has been marked "{status}""#)]
fn task_has_been_marked(world: &mut ChecklistWorld, status: String) -> Result<(), eyre::Report> {
    let task_id = world.task()?.id();
    let updated = run_async(
        world
            .service
            .update_status(&actor("lead")?, UpdateStatusRequest::new(task_id, status)),
    )
    .wrap_err("set status in scenario setup")?;
    world.task = Some(updated);
    Ok(())
}
