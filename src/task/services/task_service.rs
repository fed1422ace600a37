//! Service layer applying the task business rules over a repository.

use crate::task::{
    domain::{Task, TaskDetails, TaskDomainError, TaskId, TaskTitle},
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, instrument, warn};

/// Request payload for creating or replacing a task's details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskInput {
    title: String,
    description: Option<String>,
    expiration_date: DateTime<Utc>,
}

impl TaskInput {
    /// Creates an input with the required fields.
    #[must_use]
    pub fn new(title: impl Into<String>, expiration_date: DateTime<Utc>) -> Self {
        Self {
            title: title.into(),
            description: None,
            expiration_date,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the task description from an optional value.
    #[must_use]
    pub fn with_optional_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Returns the raw title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    fn into_details(self) -> Result<TaskDetails, TaskDomainError> {
        let title = TaskTitle::new(self.title)?;
        let details = TaskDetails::new(title, self.expiration_date);
        Ok(match self.description {
            Some(description) => details.with_description(description),
            None => details,
        })
    }
}

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// A business rule rejected the request data.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),

    /// Another task already uses the title.
    #[error("A task with the given title already exists.")]
    TitleConflict(TaskTitle),

    /// No task exists with the identifier.
    #[error("Task not found with id: {0}")]
    NotFound(TaskId),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(TaskRepositoryError),
}

impl From<TaskRepositoryError> for TaskServiceError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::DuplicateTitle(title) => Self::TitleConflict(title),
            TaskRepositoryError::NotFound(id) => Self::NotFound(id),
            TaskRepositoryError::Persistence(_) => Self::Repository(err),
        }
    }
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task orchestration service.
pub struct TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates a task stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] when the title is blank or the
    /// expiration is not in the future, [`TaskServiceError::TitleConflict`]
    /// when the title is taken, or [`TaskServiceError::Repository`] when the
    /// store fails.
    #[instrument(skip_all, fields(title = %input.title()))]
    pub async fn create(&self, input: TaskInput) -> TaskServiceResult<Task> {
        let details = input.into_details().inspect_err(|err| {
            warn!(error = %err, "task creation rejected");
        })?;
        let task = Task::new(details, &*self.clock).inspect_err(|err| {
            warn!(error = %err, "task creation rejected");
        })?;

        if self.repository.find_by_title(task.title()).await?.is_some() {
            warn!("task creation rejected, title already exists");
            return Err(TaskServiceError::TitleConflict(task.title().clone()));
        }

        let stored = self.repository.save(&task).await?;
        info!(task_id = %stored.id(), "task created");
        Ok(stored)
    }

    /// Returns every task in store order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the store fails.
    #[instrument(skip_all)]
    pub async fn list(&self) -> TaskServiceResult<Vec<Task>> {
        let tasks = self.repository.find_all().await?;
        info!(count = tasks.len(), "tasks fetched");
        Ok(tasks)
    }

    /// Returns a single task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist.
    #[instrument(skip_all, fields(task_id = %task_id))]
    pub async fn get(&self, task_id: TaskId) -> TaskServiceResult<Task> {
        self.find_existing(task_id).await
    }

    /// Replaces title, description and expiration date of a task.
    ///
    /// Title uniqueness is not re-checked here; the store's own constraint
    /// still applies on save.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist,
    /// [`TaskServiceError::Validation`] when the title is blank or the
    /// expiration does not follow the creation date, and
    /// [`TaskServiceError::TitleConflict`] when the store rejects the title.
    #[instrument(skip_all, fields(task_id = %task_id))]
    pub async fn update(&self, task_id: TaskId, input: TaskInput) -> TaskServiceResult<Task> {
        let details = input.into_details().inspect_err(|err| {
            warn!(error = %err, "task update rejected");
        })?;
        let mut task = self.find_existing(task_id).await?;
        task.revise(details).inspect_err(|err| {
            warn!(error = %err, "task update rejected");
        })?;

        let stored = self.repository.save(&task).await?;
        info!("task updated");
        Ok(stored)
    }

    /// Permanently deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist.
    #[instrument(skip_all, fields(task_id = %task_id))]
    pub async fn delete(&self, task_id: TaskId) -> TaskServiceResult<()> {
        self.find_existing(task_id).await?;
        self.repository.delete_by_id(task_id).await?;
        info!("task deleted");
        Ok(())
    }

    async fn find_existing(&self, task_id: TaskId) -> TaskServiceResult<Task> {
        self.repository.find_by_id(task_id).await?.ok_or_else(|| {
            warn!("task not found");
            TaskServiceError::NotFound(task_id)
        })
    }
}
