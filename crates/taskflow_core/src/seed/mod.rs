//! Embedded mock fixtures and the store seeder.
//!
//! # Responsibility
//! - Ship the static task/category collections the mock layer starts from.
//! - Load them into a freshly opened, empty store.
//!
//! # Invariants
//! - Fixture records keep the original mock-data JSON shape (`Id`,
//!   camelCase keys).
//! - Seeding refuses to run against a store that already holds data.

use crate::model::category::Category;
use crate::model::task::Task;
use crate::repo::category_repo::{CategoryRepository, SqliteCategoryRepository};
use crate::repo::task_repo::{SqliteTaskRepository, TaskRepository};
use crate::repo::RepoError;
use log::info;
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};

const CATEGORIES_FIXTURE: &str = include_str!("categories.json");
const TASKS_FIXTURE: &str = include_str!("tasks.json");

pub type SeedResult<T> = Result<T, SeedError>;

/// Error for fixture parsing and seeding.
#[derive(Debug)]
pub enum SeedError {
    /// The store already holds task or category records.
    AlreadySeeded,
    /// A fixture file does not parse into the model shape.
    Parse(serde_json::Error),
    /// Storage-layer failure while inserting records.
    Repo(RepoError),
}

impl Display for SeedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadySeeded => write!(f, "store already contains data; refusing to seed"),
            Self::Parse(err) => write!(f, "invalid mock fixture: {err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SeedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::AlreadySeeded => None,
            Self::Parse(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for SeedError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

impl From<RepoError> for SeedError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Counts of records inserted by one seeding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub categories: usize,
    pub tasks: usize,
}

/// Loads the embedded fixtures into an empty store.
///
/// # Errors
/// - `SeedError::AlreadySeeded` when either collection is non-empty.
/// - Parse/storage errors are propagated unchanged.
pub fn seed_mock_data(conn: &Connection) -> SeedResult<SeedSummary> {
    let category_repo = SqliteCategoryRepository::new(conn);
    let task_repo = SqliteTaskRepository::new(conn);

    if category_repo.category_count()? > 0 || task_repo.task_count()? > 0 {
        return Err(SeedError::AlreadySeeded);
    }

    let categories: Vec<Category> = serde_json::from_str(CATEGORIES_FIXTURE)?;
    let tasks: Vec<Task> = serde_json::from_str(TASKS_FIXTURE)?;

    for category in &categories {
        category_repo.insert_category(category)?;
    }
    for task in &tasks {
        task_repo.insert_task(task)?;
    }

    info!(
        "event=seed_loaded module=seed categories={} tasks={} status=ok",
        categories.len(),
        tasks.len()
    );

    Ok(SeedSummary {
        categories: categories.len(),
        tasks: tasks.len(),
    })
}
