//! Aggregate counters shared by task listings, dashboards and reports.

use crate::task::{
    domain::{Priority, Task, TaskStatus},
    ports::{TaskFilter, TaskRepository, TaskRepositoryResult},
};
use serde::{Serialize, Serializer};
use std::fmt;

/// Number of tasks per status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusBreakdown {
    /// Tasks in [`TaskStatus::Pending`].
    pub pending: usize,
    /// Tasks in [`TaskStatus::InProgress`].
    pub in_progress: usize,
    /// Tasks in [`TaskStatus::Completed`].
    pub completed: usize,
}

impl StatusBreakdown {
    /// Tallies the statuses of `tasks`.
    #[must_use]
    pub fn tally<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Self {
        tasks
            .into_iter()
            .fold(Self::default(), |mut counts, task| {
                counts.record(task.status());
                counts
            })
    }

    /// Returns the count for one status.
    #[must_use]
    pub const fn get(&self, status: TaskStatus) -> usize {
        match status {
            TaskStatus::Pending => self.pending,
            TaskStatus::InProgress => self.in_progress,
            TaskStatus::Completed => self.completed,
        }
    }

    /// Returns the sum over all statuses.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.pending + self.in_progress + self.completed
    }

    const fn record(&mut self, status: TaskStatus) {
        match status {
            TaskStatus::Pending => self.pending += 1,
            TaskStatus::InProgress => self.in_progress += 1,
            TaskStatus::Completed => self.completed += 1,
        }
    }
}

/// Number of tasks per priority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PriorityBreakdown {
    /// Tasks with [`Priority::Low`].
    pub low: usize,
    /// Tasks with [`Priority::Medium`].
    pub medium: usize,
    /// Tasks with [`Priority::High`].
    pub high: usize,
}

impl PriorityBreakdown {
    /// Tallies the priorities of `tasks`.
    #[must_use]
    pub fn tally<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Self {
        tasks
            .into_iter()
            .fold(Self::default(), |mut counts, task| {
                match task.priority() {
                    Priority::Low => counts.low += 1,
                    Priority::Medium => counts.medium += 1,
                    Priority::High => counts.high += 1,
                }
                counts
            })
    }
}

/// Share of completed tasks, kept in tenths of a percent.
///
/// Renders with one decimal place, e.g. `66.7`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct CompletionRate(u16);

impl CompletionRate {
    /// Computes `completed / total` rounded half-up to one decimal place.
    ///
    /// Zero tasks yield `0.0`.
    #[must_use]
    #[expect(
        clippy::integer_division,
        reason = "half-up rounding is expressed exactly in integer arithmetic"
    )]
    pub fn from_counts(completed: usize, total: usize) -> Self {
        if total == 0 {
            return Self(0);
        }
        let done = completed.min(total);
        let tenths = done
            .checked_mul(2000)
            .and_then(|scaled| scaled.checked_add(total))
            .zip(total.checked_mul(2))
            .map_or(0, |(numerator, denominator)| numerator / denominator);
        Self(u16::try_from(tenths).unwrap_or(1000))
    }

    /// Returns the rate in tenths of a percent (`0..=1000`).
    #[must_use]
    pub const fn tenths_of_percent(self) -> u16 {
        self.0
    }
}

impl fmt::Display for CompletionRate {
    #[expect(
        clippy::integer_division,
        clippy::integer_division_remainder_used,
        reason = "splitting tenths into whole and fractional digits"
    )]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}

impl Serialize for CompletionRate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Counts tasks per status within `scope` using repository counts.
pub(crate) async fn count_by_status<R>(
    repository: &R,
    scope: &TaskFilter,
) -> TaskRepositoryResult<StatusBreakdown>
where
    R: TaskRepository + ?Sized,
{
    let mut counts = StatusBreakdown::default();
    for status in TaskStatus::ALL {
        let count = repository.count(&scope.clone().with_status(status)).await?;
        match status {
            TaskStatus::Pending => counts.pending = count,
            TaskStatus::InProgress => counts.in_progress = count,
            TaskStatus::Completed => counts.completed = count,
        }
    }
    Ok(counts)
}
