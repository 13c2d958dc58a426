//! Checklist items that drive task progress.

use super::{ChecklistItemId, Progress, TaskDomainError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A sub-unit of work on a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    id: ChecklistItemId,
    text: String,
    completed: bool,
}

impl ChecklistItem {
    /// Returns the item identifier.
    #[must_use]
    pub const fn id(&self) -> ChecklistItemId {
        self.id
    }

    /// Returns the item text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns whether the item is done.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    pub(super) const fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }
}

/// Unvalidated checklist item supplied by a caller.
///
/// Items without an identifier receive a fresh one; items carrying an
/// identifier keep it, so a client can resubmit an edited checklist without
/// losing item identity.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChecklistItemDraft {
    /// Existing identifier to keep, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ChecklistItemId>,
    /// Item text.
    pub text: String,
    /// Whether the item is done.
    #[serde(default)]
    pub completed: bool,
}

impl ChecklistItemDraft {
    /// Creates an open draft item with the given text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: None,
            text: text.into(),
            completed: false,
        }
    }

    /// Marks the draft as done or not.
    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Keeps an existing identifier.
    #[must_use]
    pub const fn with_id(mut self, id: ChecklistItemId) -> Self {
        self.id = Some(id);
        self
    }
}

/// Validates drafts into checklist items.
///
/// Texts are trimmed and must be non-empty; identifiers must be unique.
pub(super) fn build_checklist(
    drafts: Vec<ChecklistItemDraft>,
) -> Result<Vec<ChecklistItem>, TaskDomainError> {
    let mut seen = HashSet::with_capacity(drafts.len());
    let mut items = Vec::with_capacity(drafts.len());
    for (position, draft) in drafts.into_iter().enumerate() {
        let text = draft.text.trim();
        if text.is_empty() {
            return Err(TaskDomainError::EmptyChecklistText { position });
        }
        let id = draft.id.unwrap_or_default();
        if !seen.insert(id) {
            return Err(TaskDomainError::DuplicateChecklistItem(id));
        }
        items.push(ChecklistItem {
            id,
            text: text.to_owned(),
            completed: draft.completed,
        });
    }
    Ok(items)
}

/// Counts completed items.
pub(super) fn completed_count(items: &[ChecklistItem]) -> usize {
    items.iter().filter(|item| item.completed).count()
}

/// Progress implied by a checklist, or `None` for an empty checklist.
pub(super) fn checklist_progress(items: &[ChecklistItem]) -> Option<Progress> {
    Progress::from_ratio(completed_count(items), items.len())
}
