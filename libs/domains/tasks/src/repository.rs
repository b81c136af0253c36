use async_trait::async_trait;
use database::clock;
use sea_orm::ActiveValue::Set;
use sea_orm::TryIntoModel;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::entity;
use crate::error::{TaskError, TaskResult};
use crate::models::{CreateTask, Task, UpdateTask};

/// Repository trait for Task persistence
///
/// Implementations own id assignment and the `created_at` /
/// `last_updated_at` stamps; callers never supply them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Create a new task
    async fn create(&self, input: CreateTask) -> TaskResult<Task>;

    /// Get a task by ID
    async fn get_by_id(&self, id: i64) -> TaskResult<Option<Task>>;

    /// List all tasks in ascending id order
    async fn list(&self) -> TaskResult<Vec<Task>>;

    /// Update an existing task
    async fn update(&self, id: i64, input: UpdateTask) -> TaskResult<Task>;

    /// Delete a task by ID
    async fn delete(&self, id: i64) -> TaskResult<bool>;
}

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<i64, entity::Model>,
    last_id: i64,
}

/// In-memory implementation of TaskRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryTaskRepository {
    table: Arc<RwLock<Table>>,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn create(&self, input: CreateTask) -> TaskResult<Task> {
        let mut active = input.into_active_model(clock::now());
        let mut table = self.table.write().await;

        let id = table.last_id + 1;
        active.id = Set(id);
        let model = active.try_into_model()?;

        table.last_id = id;
        table.rows.insert(id, model.clone());

        tracing::info!(task_id = id, "Created task");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i64) -> TaskResult<Option<Task>> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned().map(Task::from))
    }

    async fn list(&self) -> TaskResult<Vec<Task>> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().map(Task::from).collect())
    }

    async fn update(&self, id: i64, input: UpdateTask) -> TaskResult<Task> {
        let mut table = self.table.write().await;

        let mut task: Task = table
            .rows
            .get(&id)
            .cloned()
            .ok_or(TaskError::NotFound(id))?
            .into();

        task.apply_update(input);
        task.last_updated_at = clock::after(task.last_updated_at);
        table.rows.insert(id, task.clone().into());

        tracing::info!(task_id = id, "Updated task");
        Ok(task)
    }

    async fn delete(&self, id: i64) -> TaskResult<bool> {
        let mut table = self.table.write().await;

        if table.rows.remove(&id).is_some() {
            tracing::info!(task_id = id, "Deleted task");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
