//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record and its priority scale.
//! - Provide draft/patch request types with merge semantics.
//!
//! # Invariants
//! - `id` is a unique positive integer and never reused for another task.
//! - `title` is non-empty after trimming.
//! - `order` only drives display ordering; it carries no uniqueness claim.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable numeric identifier for tasks.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = i64;

pub use crate::model::category::CategoryId;

/// Task urgency scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Rank used by schedule ordering: high sorts first.
    pub fn urgency_rank(self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        };
        write!(f, "{label}")
    }
}

/// Canonical task record.
///
/// Serialized field names follow the mock fixture shape (`Id`, camelCase).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(rename = "Id")]
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// References `Category.id`; dangling values are tolerated.
    pub category_id: CategoryId,
    pub priority: Priority,
    pub due_date: Option<DateTime<Utc>>,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    /// Display ordering, ascending.
    pub order: i64,
}

impl Task {
    /// Returns whether this task is due on the given calendar day.
    pub fn is_due_on(&self, day: NaiveDate) -> bool {
        self.due_date
            .map_or(false, |due| due.date_naive() == day)
    }

    /// Returns whether this task counts as overdue on the given day.
    ///
    /// Overdue means incomplete with a due date strictly before `today`;
    /// a task due today is never overdue.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.completed
            && self
                .due_date
                .map_or(false, |due| due.date_naive() < today)
    }
}

/// Validation failure for task drafts and patches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Title is empty or whitespace-only.
    EmptyTitle,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "task title must not be empty"),
        }
    }
}

impl Error for TaskValidationError {}

/// Request model for creating a task.
///
/// Id, order, completion state and creation timestamp are assigned by the
/// service layer, never by callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub category_id: CategoryId,
    pub priority: Priority,
    pub due_date: Option<DateTime<Utc>>,
}

impl TaskDraft {
    /// Creates a draft with default description, priority and due date.
    pub fn new(title: impl Into<String>, category_id: CategoryId) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            category_id,
            priority: Priority::default(),
            due_date: None,
        }
    }

    /// Checks draft-level invariants before persistence.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.title.trim().is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }
        Ok(())
    }
}

/// Partial update applied over an existing task.
///
/// `None` fields stay unchanged. `due_date` is doubly optional so a patch
/// can clear an existing due date with `Some(None)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category_id: Option<CategoryId>,
    pub priority: Option<Priority>,
    pub due_date: Option<Option<DateTime<Utc>>>,
    pub completed: Option<bool>,
    pub order: Option<i64>,
}

impl TaskPatch {
    /// Checks patch-level invariants before merging.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if let Some(title) = &self.title {
            if title.trim().is_empty() {
                return Err(TaskValidationError::EmptyTitle);
            }
        }
        Ok(())
    }

    /// Merges set fields into `task`, leaving the id untouched.
    pub fn apply(&self, task: &mut Task) {
        if let Some(title) = &self.title {
            task.title = title.clone();
        }
        if let Some(description) = &self.description {
            task.description = description.clone();
        }
        if let Some(category_id) = self.category_id {
            task.category_id = category_id;
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(due_date) = self.due_date {
            task.due_date = due_date;
        }
        if let Some(completed) = self.completed {
            task.completed = completed;
        }
        if let Some(order) = self.order {
            task.order = order;
        }
    }
}
