//! Core domain logic for TaskFlow.
//! This crate is the single source of truth for the mock data layer and
//! the view-support computations built on top of it.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod seed;
pub mod service;
pub mod view;

pub use db::open_db_in_memory;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::category::{
    Category, CategoryDraft, CategoryId, CategoryPatch, CategoryValidationError,
};
pub use model::task::{Priority, Task, TaskDraft, TaskId, TaskPatch, TaskValidationError};
pub use repo::category_repo::{CategoryRepository, SqliteCategoryRepository};
pub use repo::task_repo::{SqliteTaskRepository, TaskRepository};
pub use repo::{RepoError, RepoResult};
pub use seed::{seed_mock_data, SeedError, SeedSummary};
pub use service::category_service::{CategoryService, CategoryServiceError};
pub use service::latency::SimulatedLatency;
pub use service::task_service::{TaskService, TaskServiceError};
pub use view::filter::StatusFilter;
pub use view::stats::TaskStats;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
