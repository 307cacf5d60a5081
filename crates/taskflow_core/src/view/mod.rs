//! Pure view-support logic.
//!
//! # Responsibility
//! - Compute everything list, calendar and dashboard views render:
//!   filtering, search highlighting, date grids, due-date badges, stats.
//!
//! # Invariants
//! - Every function is side-effect free; the caller supplies "today" so
//!   behavior is reproducible at any fixed date.

use crate::model::category::{Category, CategoryId};

pub mod calendar;
pub mod due;
pub mod filter;
pub mod highlight;
pub mod stats;

/// Resolves a task's category, degrading dangling references to the
/// "Uncategorized" stand-in.
pub fn category_or_fallback(categories: &[Category], id: CategoryId) -> Category {
    categories
        .iter()
        .find(|category| category.id == id)
        .cloned()
        .unwrap_or_else(Category::uncategorized)
}
