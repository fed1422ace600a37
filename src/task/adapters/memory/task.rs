//! In-memory repository for task records.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::task::{
    domain::{Task, TaskId, TaskTitle},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Mirrors the relational adapter's unique title index so both stores reject
/// the same writes.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, Task>,
    title_index: HashMap<String, TaskId>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> TaskRepositoryResult<RwLockReadGuard<'_, InMemoryTaskState>> {
        self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> TaskRepositoryResult<RwLockWriteGuard<'_, InMemoryTaskState>> {
        self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn find_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.read()?;
        let mut tasks: Vec<Task> = state.tasks.values().cloned().collect();
        tasks.sort_by_key(|task| (task.creation_date(), task.id()));
        Ok(tasks)
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.read()?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn find_by_title(&self, title: &TaskTitle) -> TaskRepositoryResult<Option<Task>> {
        let state = self.read()?;
        let task = state
            .title_index
            .get(title.as_str())
            .and_then(|task_id| state.tasks.get(task_id))
            .cloned();
        Ok(task)
    }

    async fn save(&self, task: &Task) -> TaskRepositoryResult<Task> {
        let mut state = self.write()?;

        let title_key = task.title().as_str();
        if let Some(holder) = state.title_index.get(title_key)
            && *holder != task.id()
        {
            return Err(TaskRepositoryError::DuplicateTitle(task.title().clone()));
        }

        if let Some(previous) = state.tasks.get(&task.id()) {
            let previous_title = previous.title().as_str().to_owned();
            state.title_index.remove(&previous_title);
        }

        state
            .title_index
            .insert(title_key.to_owned(), task.id());
        state.tasks.insert(task.id(), task.clone());
        Ok(task.clone())
    }

    async fn delete_by_id(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut state = self.write()?;
        let removed = state
            .tasks
            .remove(&id)
            .ok_or(TaskRepositoryError::NotFound(id))?;
        state.title_index.remove(removed.title().as_str());
        Ok(())
    }
}
