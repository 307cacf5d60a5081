//! Task mock-API service.
//!
//! # Responsibility
//! - Provide the task CRUD/filter/search surface consumed by views.
//! - Assign ids (`max + 1`), display order (`count + 1`) and creation
//!   timestamps.
//!
//! # Invariants
//! - Every operation pauses once through the configured latency policy.
//! - "Not found" is reported as `Ok(None)` and leaves the collection
//!   unchanged.
//! - Task list responses are sorted by `order` ascending.

use crate::model::task::{CategoryId, Task, TaskDraft, TaskId, TaskPatch, TaskValidationError};
use crate::repo::task_repo::TaskRepository;
use crate::repo::RepoError;
use crate::service::latency::SimulatedLatency;
use chrono::Utc;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Service error for task use-cases.
#[derive(Debug)]
pub enum TaskServiceError {
    /// Draft or patch failed model validation.
    Validation(TaskValidationError),
    /// Storage-layer failure.
    Repo(RepoError),
}

impl Display for TaskServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for TaskServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<TaskValidationError> for TaskServiceError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for TaskServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Task service facade over repository implementations.
pub struct TaskService<R: TaskRepository> {
    repo: R,
    latency: SimulatedLatency,
}

impl<R: TaskRepository> TaskService<R> {
    /// Creates a service with the network-default latency profile.
    pub fn new(repo: R) -> Self {
        Self::with_latency(repo, SimulatedLatency::network_default())
    }

    /// Creates a service that responds immediately.
    pub fn without_latency(repo: R) -> Self {
        Self::with_latency(repo, SimulatedLatency::disabled())
    }

    /// Creates a service with an explicit latency policy.
    pub fn with_latency(repo: R, latency: SimulatedLatency) -> Self {
        Self { repo, latency }
    }

    /// Returns all tasks sorted by display order.
    pub fn get_all(&self) -> TaskServiceResult<Vec<Task>> {
        self.latency.pause();
        Ok(self.repo.list_tasks()?)
    }

    /// Returns one task by id, or `None` when absent.
    pub fn get_by_id(&self, id: TaskId) -> TaskServiceResult<Option<Task>> {
        self.latency.pause();
        Ok(self.repo.get_task(id)?)
    }

    /// Creates a task from a draft and returns the stored record.
    ///
    /// # Contract
    /// - `id = max(existing ids) + 1` (1 for an empty collection).
    /// - `order = count(existing) + 1`.
    /// - `completed = false`, `created_at = now`.
    /// - Title and description are stored trimmed.
    pub fn create(&self, draft: &TaskDraft) -> TaskServiceResult<Task> {
        self.latency.pause();
        draft.validate()?;

        let task = Task {
            id: self.repo.next_task_id()?,
            title: draft.title.trim().to_string(),
            description: draft.description.trim().to_string(),
            category_id: draft.category_id,
            priority: draft.priority,
            due_date: draft.due_date,
            completed: false,
            created_at: Utc::now(),
            order: self.repo.task_count()? + 1,
        };

        self.repo.insert_task(&task)?;
        info!(
            "event=task_create module=service id={} priority={} status=ok",
            task.id, task.priority
        );
        Ok(task)
    }

    /// Merges a patch into the task with the given id.
    ///
    /// Returns `None` (collection unchanged) when the id is absent.
    pub fn update(&self, id: TaskId, patch: &TaskPatch) -> TaskServiceResult<Option<Task>> {
        self.latency.pause();
        patch.validate()?;

        let Some(mut task) = self.repo.get_task(id)? else {
            return Ok(None);
        };
        patch.apply(&mut task);

        if !self.repo.update_task(&task)? {
            return Ok(None);
        }

        info!("event=task_update module=service id={id} status=ok");
        Ok(Some(task))
    }

    /// Removes the task with the given id and returns it.
    pub fn delete(&self, id: TaskId) -> TaskServiceResult<Option<Task>> {
        self.latency.pause();
        let deleted = self.repo.delete_task(id)?;
        if deleted.is_some() {
            info!("event=task_delete module=service id={id} status=ok");
        }
        Ok(deleted)
    }

    /// Flips the completion flag of the task with the given id.
    ///
    /// Two consecutive calls restore the original state.
    pub fn toggle_complete(&self, id: TaskId) -> TaskServiceResult<Option<Task>> {
        self.latency.pause();

        let Some(mut task) = self.repo.get_task(id)? else {
            return Ok(None);
        };
        task.completed = !task.completed;

        if !self.repo.update_task(&task)? {
            return Ok(None);
        }

        info!(
            "event=task_toggle module=service id={id} completed={} status=ok",
            task.completed
        );
        Ok(Some(task))
    }

    /// Moves the task with the given id to a new display order slot.
    pub fn update_order(&self, id: TaskId, new_order: i64) -> TaskServiceResult<Option<Task>> {
        self.latency.pause();

        let Some(mut task) = self.repo.get_task(id)? else {
            return Ok(None);
        };
        task.order = new_order;

        if !self.repo.update_task(&task)? {
            return Ok(None);
        }

        Ok(Some(task))
    }

    /// Returns the tasks belonging to one category, order-sorted.
    pub fn get_by_category(&self, category_id: CategoryId) -> TaskServiceResult<Vec<Task>> {
        self.latency.pause();
        Ok(self.repo.list_tasks_by_category(category_id)?)
    }

    /// Returns the tasks matching one completion state, order-sorted.
    pub fn get_by_status(&self, completed: bool) -> TaskServiceResult<Vec<Task>> {
        self.latency.pause();
        Ok(self.repo.list_tasks_by_completion(completed)?)
    }

    /// Case-insensitive substring search over title and description.
    ///
    /// A blank query matches every task, like the backend it mocks.
    pub fn search(&self, query: &str) -> TaskServiceResult<Vec<Task>> {
        self.latency.pause();
        Ok(self.repo.search_tasks(query)?)
    }
}
