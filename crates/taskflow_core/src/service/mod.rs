//! Mock API service facades.
//!
//! # Responsibility
//! - Expose the task/category API surface consumed by views.
//! - Simulate network latency in front of the in-memory store.
//!
//! # Invariants
//! - Services never bypass repository storage contracts.
//! - All returned records are owned copies; callers cannot alias store
//!   state.

pub mod category_service;
pub mod latency;
pub mod task_service;
