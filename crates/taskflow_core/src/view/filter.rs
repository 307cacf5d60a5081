//! Status filters and the combined list-view predicate.
//!
//! # Responsibility
//! - Define the sidebar filter set and its per-task predicates.
//! - Combine search and status filtering for list rendering.
//!
//! # Invariants
//! - Overdue means incomplete with a due date strictly before today;
//!   a task due today is never overdue.
//! - A blank search query constrains nothing.

use crate::model::category::CategoryId;
use crate::model::task::{Priority, Task};
use chrono::NaiveDate;

/// Sidebar filter applied to task lists and calendar cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Pending,
    Completed,
    Overdue,
    DueToday,
    HighPriority,
    /// Tasks belonging to one category.
    Category(CategoryId),
}

impl StatusFilter {
    /// Returns whether `task` passes this filter on the given day.
    pub fn matches(&self, task: &Task, today: NaiveDate) -> bool {
        match self {
            Self::All => true,
            Self::Pending => !task.completed,
            Self::Completed => task.completed,
            Self::Overdue => task.is_overdue(today),
            Self::DueToday => task.is_due_on(today),
            Self::HighPriority => task.priority == Priority::High && !task.completed,
            Self::Category(id) => task.category_id == *id,
        }
    }
}

/// Case-insensitive substring predicate over title and description.
///
/// An empty query matches every task.
pub fn matches_search(task: &Task, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    task.title.to_lowercase().contains(&needle)
        || task.description.to_lowercase().contains(&needle)
}

/// Applies search and status filtering, preserving input order.
pub fn filter_tasks<'a>(
    tasks: &'a [Task],
    filter: StatusFilter,
    search: &str,
    today: NaiveDate,
) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|task| matches_search(task, search) && filter.matches(task, today))
        .collect()
}
