//! In-memory integration tests for admin and member task views.

use super::helpers::{Team, create_task, lead, member, team, uid};
use eyre::{Result, ensure};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn members_see_only_their_tasks(team: Team) -> Result<()> {
    create_task(&team.lifecycle, "Alpha", &["alice"], &[true]).await?;
    create_task(&team.lifecycle, "Beta", &["bob"], &[false]).await?;
    create_task(&team.lifecycle, "Gamma", &["alice", "bob"], &[true, false]).await?;

    let admin_view = team.lifecycle.list_tasks(&lead(), None).await?;
    let alice_view = team.lifecycle.list_tasks(&member("alice"), None).await?;
    let carol_view = team.lifecycle.list_tasks(&member("carol"), None).await?;

    ensure!(admin_view.status_summary.all == 3);
    ensure!(alice_view.status_summary.all == 2);
    ensure!(
        alice_view
            .tasks
            .iter()
            .all(|entry| entry.task.is_assigned_to(&uid("alice")))
    );
    ensure!(carol_view.tasks.is_empty());
    ensure!(carol_view.status_summary.all == 0);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn summary_ignores_status_filter(team: Team) -> Result<()> {
    create_task(&team.lifecycle, "One", &["alice"], &[]).await?;
    create_task(&team.lifecycle, "Two", &["alice"], &[true, false]).await?;
    create_task(&team.lifecycle, "Three", &["alice"], &[true]).await?;

    let listing = team
        .lifecycle
        .list_tasks(&member("alice"), Some("in-progress"))
        .await?;

    ensure!(listing.tasks.len() == 1);
    ensure!(listing.status_summary.all == 3);
    ensure!(listing.status_summary.pending == 1);
    ensure!(listing.status_summary.in_progress == 1);
    ensure!(listing.status_summary.completed == 1);
    Ok(())
}
