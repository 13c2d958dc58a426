//! Then steps for task authorization BDD scenarios.

use super::world::{AuthorizationWorld, actor, run_async};
use rstest_bdd_macros::then;
use taskdesk::error::ErrorKind;
use taskdesk::task::domain::TaskStatus;

#[then("the request is forbidden")]
fn request_forbidden(world: &AuthorizationWorld) -> Result<(), eyre::Report> {
    match world.outcome()? {
        Err(err) if err.kind() == ErrorKind::Forbidden => Ok(()),
        other => Err(eyre::eyre!("expected a forbidden error, got {other:?}")),
    }
}

#[then("the request succeeds")]
fn request_succeeds(world: &AuthorizationWorld) -> Result<(), eyre::Report> {
    match world.outcome()? {
        Ok(_) => Ok(()),
        Err(err) => Err(eyre::eyre!("expected success, got {err}")),
    }
}

#[then(r#"the stored task status is "{status}""#)]
fn stored_status_is(world: &AuthorizationWorld, status: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let task = run_async(world.service.get_task(&actor("lead")?, world.task_id()?))?;
    if task.status() != expected {
        return Err(eyre::eyre!(
            "expected status {}, found {}",
            expected.as_str(),
            task.status().as_str()
        ));
    }
    Ok(())
}

#[then("the task no longer exists")]
fn task_no_longer_exists(world: &AuthorizationWorld) -> Result<(), eyre::Report> {
    match run_async(world.service.get_task(&actor("lead")?, world.task_id()?)) {
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
        other => Err(eyre::eyre!("expected the task to be gone, got {other:?}")),
    }
}
