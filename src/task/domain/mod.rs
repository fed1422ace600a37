//! Domain model for task record management.
//!
//! The task domain owns title validation and the expiration-date rules while
//! keeping persistence and transport concerns outside the domain boundary.

mod error;
mod ids;
mod task;

pub use error::TaskDomainError;
pub use ids::{TaskId, TaskTitle};
pub use task::{PersistedTaskData, Task, TaskDetails, normalize_timestamp};
