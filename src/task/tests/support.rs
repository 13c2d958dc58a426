//! Shared fixtures for task tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
use mockable::Clock;

use crate::access::domain::Actor;
use crate::task::domain::{ChecklistItemDraft, NewTask, Task};
use crate::user::{
    adapters::memory::InMemoryUserDirectory,
    domain::{Role, UserId, UserProfile},
};

/// Clock that advances one second on every reading.
pub(super) struct SteppingClock {
    base: DateTime<Utc>,
    ticks: AtomicI64,
}

impl SteppingClock {
    pub(super) fn new() -> Self {
        Self {
            base: Utc
                .with_ymd_and_hms(2026, 1, 5, 9, 0, 0)
                .single()
                .expect("valid base timestamp"),
            ticks: AtomicI64::new(0),
        }
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        self.base + TimeDelta::seconds(tick)
    }
}

pub(super) fn uid(raw: &str) -> UserId {
    UserId::new(raw).expect("valid user id")
}

pub(super) fn admin() -> Actor {
    Actor::admin(uid("a1"))
}

pub(super) fn member(raw: &str) -> Actor {
    Actor::member(uid(raw))
}

pub(super) fn directory() -> Arc<InMemoryUserDirectory> {
    let profile = |id: &str, name: &str, role: Role| {
        UserProfile::new(uid(id), name, format!("{id}@example.com"), role)
            .expect("valid profile")
    };
    let directory = InMemoryUserDirectory::with_users([
        profile("a1", "Avery Admin", Role::Admin),
        profile("u1", "Uma", Role::Member),
        profile("u2", "Uri", Role::Member),
        profile("u3", "Ulla", Role::Member),
    ])
    .expect("unique users");
    Arc::new(directory)
}

/// Builds a task assigned to `assignees` with the given item states.
pub(super) fn task_with_checklist(assignees: &[&str], items: &[bool], clock: &impl Clock) -> Task {
    let new_task = NewTask {
        title: "Prepare release notes".to_owned(),
        assigned_to: assignees.iter().map(|raw| uid(raw)).collect(),
        todo_checklist: items
            .iter()
            .enumerate()
            .map(|(index, done)| {
                ChecklistItemDraft::new(format!("step {index}")).with_completed(*done)
            })
            .collect(),
        ..NewTask::default()
    };
    Task::create(new_task, uid("a1"), clock).expect("valid task")
}
