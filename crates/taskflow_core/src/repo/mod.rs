//! Repository layer abstractions and storage implementations.
//!
//! # Responsibility
//! - Define data-access contracts for the task and category collections.
//! - Isolate SQL details from the mock service facades.
//!
//! # Invariants
//! - Read paths reject invalid persisted state instead of masking it.
//! - "Not found" is data (`Option`/`bool` returns), not an error; errors
//!   are reserved for storage failures.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod category_repo;
pub mod task_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Storage-layer error shared by both repositories.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted record: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
