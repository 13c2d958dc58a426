//! Given steps for task authorization BDD scenarios.

use super::world::{AuthorizationWorld, actor, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskdesk::task::services::CreateTaskRequest;

#[given(r#"a task assigned to "{assignee}""#)]
fn task_assigned_to(world: &mut AuthorizationWorld, assignee: String) -> Result<(), eyre::Report> {
    let created = run_async(world.service.create_task(
        &actor("lead")?,
        CreateTaskRequest::new("Authorization scenario", [assignee]),
    ))
    .wrap_err("create task for authorization scenario")?;
    world.task_id = Some(created.id());
    Ok(())
}
