//! Category mock-API service.
//!
//! # Responsibility
//! - Provide the category CRUD surface consumed by views.
//! - Apply creation defaults (color, icon) and id/order assignment.
//!
//! # Invariants
//! - Every operation pauses once through the configured latency policy.
//! - "Not found" is reported as `Ok(None)` and leaves the collection
//!   unchanged.

use crate::model::category::{
    Category, CategoryDraft, CategoryId, CategoryPatch, CategoryValidationError,
};
use crate::repo::category_repo::CategoryRepository;
use crate::repo::RepoError;
use crate::service::latency::SimulatedLatency;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CategoryServiceResult<T> = Result<T, CategoryServiceError>;

/// Service error for category use-cases.
#[derive(Debug)]
pub enum CategoryServiceError {
    /// Draft or patch failed model validation.
    Validation(CategoryValidationError),
    /// Storage-layer failure.
    Repo(RepoError),
}

impl Display for CategoryServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CategoryServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<CategoryValidationError> for CategoryServiceError {
    fn from(value: CategoryValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for CategoryServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Category service facade over repository implementations.
pub struct CategoryService<R: CategoryRepository> {
    repo: R,
    latency: SimulatedLatency,
}

impl<R: CategoryRepository> CategoryService<R> {
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

    /// Returns all categories sorted by display order.
    pub fn get_all(&self) -> CategoryServiceResult<Vec<Category>> {
        self.latency.pause();
        Ok(self.repo.list_categories()?)
    }

    /// Returns one category by id, or `None` when absent.
    pub fn get_by_id(&self, id: CategoryId) -> CategoryServiceResult<Option<Category>> {
        self.latency.pause();
        Ok(self.repo.get_category(id)?)
    }

    /// Creates a category from a draft and returns the stored record.
    ///
    /// # Contract
    /// - `id = max(existing ids) + 1` (1 for an empty collection).
    /// - `order = count(existing) + 1`.
    /// - Blank color/icon fall back to the crate defaults.
    pub fn create(&self, draft: &CategoryDraft) -> CategoryServiceResult<Category> {
        self.latency.pause();
        draft.validate()?;

        let category = Category {
            id: self.repo.next_category_id()?,
            name: draft.name.trim().to_string(),
            color: draft.resolved_color(),
            icon: draft.resolved_icon(),
            order: self.repo.category_count()? + 1,
        };

        self.repo.insert_category(&category)?;
        info!(
            "event=category_create module=service id={} status=ok",
            category.id
        );
        Ok(category)
    }

    /// Merges a patch into the category with the given id.
    ///
    /// Returns `None` (collection unchanged) when the id is absent.
    pub fn update(
        &self,
        id: CategoryId,
        patch: &CategoryPatch,
    ) -> CategoryServiceResult<Option<Category>> {
        self.latency.pause();
        patch.validate()?;

        let Some(mut category) = self.repo.get_category(id)? else {
            return Ok(None);
        };
        patch.apply(&mut category);

        if !self.repo.update_category(&category)? {
            return Ok(None);
        }

        info!("event=category_update module=service id={id} status=ok");
        Ok(Some(category))
    }

    /// Removes the category with the given id and returns it.
    ///
    /// Tasks still referencing the id keep their dangling `category_id`;
    /// the view layer resolves them to the "Uncategorized" fallback.
    pub fn delete(&self, id: CategoryId) -> CategoryServiceResult<Option<Category>> {
        self.latency.pause();
        let deleted = self.repo.delete_category(id)?;
        if deleted.is_some() {
            info!("event=category_delete module=service id={id} status=ok");
        }
        Ok(deleted)
    }
}
