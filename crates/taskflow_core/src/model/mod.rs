//! Domain model for tasks and categories.
//!
//! # Responsibility
//! - Define the canonical records served by the mock API layer.
//! - Own draft/patch request types and their validation rules.
//!
//! # Invariants
//! - Ids are unique positive integers assigned by the service layer.
//! - `Task.category_id` references `Category.id` but is intentionally
//!   unenforced; the view layer degrades dangling references to an
//!   "Uncategorized" fallback.

pub mod category;
pub mod task;
