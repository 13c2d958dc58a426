//! Then steps for checklist progress BDD scenarios.

use super::world::ChecklistWorld;
use rstest_bdd_macros::then;
use taskdesk::task::domain::TaskStatus;

#[then("the task progress is {progress}")]
fn task_progress_is(world: &ChecklistWorld, progress: u8) -> Result<(), eyre::Report> {
    let actual = world.task()?.progress().value();
    if actual != progress {
        return Err(eyre::eyre!("expected progress {progress}, found {actual}"));
    }
    Ok(())
}

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &ChecklistWorld, status: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let actual = world.task()?.status();
    if actual != expected {
        return Err(eyre::eyre!(
            "expected status {}, found {}",
            expected.as_str(),
            actual.as_str()
        ));
    }
    Ok(())
}

#[then("every checklist item is done")]
fn every_item_done(world: &ChecklistWorld) -> Result<(), eyre::Report> {
    let task = world.task()?;
    if let Some(open) = task.todo_checklist().iter().find(|item| !item.completed()) {
        return Err(eyre::eyre!("checklist item {:?} is still open", open.text()));
    }
    Ok(())
}
