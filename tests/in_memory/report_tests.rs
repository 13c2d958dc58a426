//! In-memory integration tests for dashboards and reports.

use super::helpers::{Team, create_task, lead, member, team};
use eyre::{OptionExt, Result, ensure};
use rstest::rstest;
use taskdesk::error::ErrorKind;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dashboards_and_reports_agree(team: Team) -> Result<()> {
    create_task(&team.lifecycle, "Alpha", &["alice"], &[true]).await?;
    create_task(&team.lifecycle, "Beta", &["alice"], &[false, false]).await?;
    create_task(&team.lifecycle, "Gamma", &["alice", "bob"], &[true, true, false]).await?;

    let personal = team.dashboards.member_dashboard(&member("alice")).await?;
    let users = team.reports.export_users(&lead()).await?;
    let alice_row = users
        .rows
        .iter()
        .find(|row| row.user_id == "alice")
        .ok_or_eyre("alice should be reported")?;

    ensure!(personal.summary.total_tasks == alice_row.total_tasks);
    ensure!(personal.summary.tasks_by_status.completed == alice_row.completed_tasks);
    ensure!(format!("{}%", personal.summary.completion_rate) == alice_row.completion_rate);
    ensure!(alice_row.completion_rate == "33.3%");

    let team_view = team.dashboards.team_dashboard(&lead()).await?;
    ensure!(team_view.summary.total_tasks == 3);
    ensure!(team_view.summary.total_users == 3);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_report_lists_every_task(team: Team) -> Result<()> {
    create_task(&team.lifecycle, "Alpha", &["alice"], &[true]).await?;
    create_task(&team.lifecycle, "Beta", &["bob", "carol"], &[]).await?;

    let report = team.reports.export_tasks(&lead()).await?;

    ensure!(report.rows.len() == 2);
    let beta = report
        .rows
        .iter()
        .find(|row| row.title == "Beta")
        .ok_or_eyre("beta should be reported")?;
    ensure!(beta.assigned_to == "Bob, Carol");
    ensure!(beta.created_by == "Lee Lead");
    ensure!(beta.status == "pending");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn members_cannot_export(team: Team) {
    let result = team.reports.export_tasks(&member("alice")).await;
    assert_eq!(result.err().map(|err| err.kind()), Some(ErrorKind::Forbidden));
}
