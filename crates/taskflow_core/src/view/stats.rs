//! Dashboard statistics and sidebar counts.
//!
//! # Responsibility
//! - Aggregate task collections into the numbers the stats overview and
//!   sidebar badges render.
//! - Derive the ordered "quick insights" list from those numbers.
//!
//! # Invariants
//! - Overdue uses the same predicate as the Overdue status filter.
//! - An empty collection yields 0% completion and no insights.

use crate::model::category::{Category, CategoryId};
use crate::model::task::Task;
use crate::view::filter::StatusFilter;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Headline numbers for the stats overview.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub overdue: usize,
}

/// One entry of the dashboard's "quick insights" list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insight {
    /// Completion is at or above 80%.
    GreatProgress,
    /// Some tasks are overdue; carries the count.
    OverdueBacklog(usize),
    /// Open tasks remain and nothing is overdue; carries the count.
    RemainingTasks(usize),
    /// Every task is completed.
    AllDone,
}

impl TaskStats {
    /// Aggregates the headline numbers for the given day.
    pub fn collect(tasks: &[Task], today: NaiveDate) -> Self {
        Self {
            total: tasks.len(),
            completed: tasks.iter().filter(|t| t.completed).count(),
            pending: tasks.iter().filter(|t| !t.completed).count(),
            overdue: tasks.iter().filter(|t| t.is_overdue(today)).count(),
        }
    }

    /// Completed share in whole percent, rounded; 0 for an empty set.
    pub fn completion_percentage(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.completed as f64 / self.total as f64) * 100.0).round() as u32
    }

    /// Ordered insight list shown under the stat cards.
    pub fn insights(&self) -> Vec<Insight> {
        if self.total == 0 {
            return Vec::new();
        }

        let mut insights = Vec::new();
        if self.completion_percentage() >= 80 {
            insights.push(Insight::GreatProgress);
        }
        if self.overdue > 0 {
            insights.push(Insight::OverdueBacklog(self.overdue));
        }
        if self.pending > 0 && self.overdue == 0 {
            insights.push(Insight::RemainingTasks(self.pending));
        }
        if self.completed == self.total {
            insights.push(Insight::AllDone);
        }
        insights
    }
}

/// Badge counts for every sidebar filter entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCounts {
    pub all: usize,
    pub pending: usize,
    pub completed: usize,
    pub overdue: usize,
    pub due_today: usize,
    pub high_priority: usize,
    /// Task count per known category id, including zero counts.
    pub per_category: BTreeMap<CategoryId, usize>,
}

/// Computes sidebar badge counts for the given day.
pub fn filter_counts(
    tasks: &[Task],
    categories: &[Category],
    today: NaiveDate,
) -> FilterCounts {
    let count_matching = |filter: StatusFilter| {
        tasks
            .iter()
            .filter(|task| filter.matches(task, today))
            .count()
    };

    let per_category = categories
        .iter()
        .map(|category| {
            (
                category.id,
                count_matching(StatusFilter::Category(category.id)),
            )
        })
        .collect();

    FilterCounts {
        all: tasks.len(),
        pending: count_matching(StatusFilter::Pending),
        completed: count_matching(StatusFilter::Completed),
        overdue: count_matching(StatusFilter::Overdue),
        due_today: count_matching(StatusFilter::DueToday),
        high_priority: count_matching(StatusFilter::HighPriority),
        per_category,
    }
}
