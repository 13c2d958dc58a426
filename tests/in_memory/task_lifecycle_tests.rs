//! In-memory integration tests for the task lifecycle.

use super::helpers::{Team, create_task, lead, member, team, uid};
use eyre::{OptionExt, Result, ensure};
use rstest::rstest;
use taskdesk::error::ErrorKind;
use taskdesk::task::{
    domain::{ChecklistItem, ChecklistItemDraft, TaskStatus},
    services::{UpdateChecklistItemRequest, UpdateStatusRequest, UpdateTaskRequest},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn assignee_works_through_checklist_to_completion(team: Team) -> Result<()> {
    let task = create_task(&team.lifecycle, "Migrate billing", &["alice"], &[false, false, false])
        .await?;
    let alice = member("alice");
    let item_ids: Vec<_> = task.todo_checklist().iter().map(ChecklistItem::id).collect();

    let mut progress = Vec::new();
    let mut current = task.clone();
    for item_id in item_ids {
        current = team
            .lifecycle
            .update_checklist_item(
                &alice,
                UpdateChecklistItemRequest::new(task.id(), item_id, true),
            )
            .await?;
        progress.push((current.progress().value(), current.status()));
    }

    ensure!(
        progress
            == [
                (33, TaskStatus::InProgress),
                (67, TaskStatus::InProgress),
                (100, TaskStatus::Completed),
            ]
    );
    ensure!(current.revision() == 3);
    ensure!(current.updated_at() >= task.updated_at());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reopening_after_explicit_completion_recomputes(team: Team) -> Result<()> {
    let task = create_task(&team.lifecycle, "Audit access", &["bob"], &[false, false]).await?;
    let bob = member("bob");

    let completed = team
        .lifecycle
        .update_status(&bob, UpdateStatusRequest::new(task.id(), "completed"))
        .await?;
    ensure!(completed.todo_checklist().iter().all(ChecklistItem::completed));

    let first = completed
        .todo_checklist()
        .first()
        .map(ChecklistItem::id)
        .ok_or_eyre("checklist item expected")?;
    let reopened = team
        .lifecycle
        .update_checklist_item(&bob, UpdateChecklistItemRequest::new(task.id(), first, false))
        .await?;

    ensure!(reopened.progress().value() == 50);
    ensure!(reopened.status() == TaskStatus::InProgress);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn explicit_pending_after_completion_keeps_progress(team: Team) -> Result<()> {
    let task = create_task(&team.lifecycle, "Close sprint", &["bob"], &[true]).await?;
    ensure!(task.status() == TaskStatus::Completed);

    let pending = team
        .lifecycle
        .update_status(&lead(), UpdateStatusRequest::new(task.id(), "pending"))
        .await?;

    ensure!(pending.status() == TaskStatus::Pending);
    ensure!(pending.progress().value() == 100);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn outsider_cannot_touch_task(team: Team) -> Result<()> {
    let task = create_task(&team.lifecycle, "Payroll", &["bob"], &[false]).await?;
    let carol = member("carol");

    let status = team
        .lifecycle
        .update_status(&carol, UpdateStatusRequest::new(task.id(), "completed"))
        .await;
    let edit = team
        .lifecycle
        .update_task(&carol, UpdateTaskRequest::new(task.id()).with_title("Mine now"))
        .await;
    let read = team.lifecycle.get_task(&carol, task.id()).await;

    for kind in [
        status.err().map(|err| err.kind()),
        edit.err().map(|err| err.kind()),
        read.err().map(|err| err.kind()),
    ] {
        ensure!(kind == Some(ErrorKind::Forbidden));
    }
    ensure!(team.lifecycle.get_task(&lead(), task.id()).await? == task);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn replacing_checklist_through_edit_recomputes(team: Team) -> Result<()> {
    let task = create_task(&team.lifecycle, "Hiring loop", &["alice", "bob"], &[false]).await?;

    let updated = team
        .lifecycle
        .update_task(
            &member("bob"),
            UpdateTaskRequest::new(task.id()).with_checklist([
                ChecklistItemDraft::new("screen").with_completed(true),
                ChecklistItemDraft::new("onsite").with_completed(true),
                ChecklistItemDraft::new("offer"),
                ChecklistItemDraft::new("signed"),
            ]),
        )
        .await?;

    ensure!(updated.progress().value() == 50);
    ensure!(updated.status() == TaskStatus::InProgress);
    ensure!(updated.completed_checklist_count() == 2);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn only_admin_deletes(team: Team) -> Result<()> {
    let task = create_task(&team.lifecycle, "Retire service", &["alice"], &[]).await?;

    let denied = team.lifecycle.delete_task(&member("alice"), task.id()).await;
    ensure!(denied.err().map(|err| err.kind()) == Some(ErrorKind::Forbidden));

    team.lifecycle.delete_task(&lead(), task.id()).await?;
    let gone = team.lifecycle.get_task(&lead(), task.id()).await;
    ensure!(gone.err().map(|err| err.kind()) == Some(ErrorKind::NotFound));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn assignees_must_exist(team: Team) -> Result<()> {
    let result = create_task(&team.lifecycle, "Phantom", &["alice", "mallory"], &[]).await;
    ensure!(result.is_err());

    let listing = team.lifecycle.list_tasks(&lead(), None).await?;
    ensure!(listing.tasks.is_empty());
    ensure!(!listing.tasks.iter().any(|entry| entry.task.is_assigned_to(&uid("alice"))));
    Ok(())
}
