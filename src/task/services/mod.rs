//! Application services for task record management.

mod task_service;

pub use task_service::{TaskInput, TaskService, TaskServiceError, TaskServiceResult};
