use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{TaskError, TaskResult};
use crate::models::{CreateTask, TaskDto, UpdateTask};
use crate::repository::TaskRepository;

/// Blank or empty values for a required field break the record's constraints
fn require(field: &'static str, value: Option<&str>) -> TaskResult<()> {
    match value {
        Some(value) if value.trim().is_empty() => Err(TaskError::ConstraintViolation(format!(
            "Field '{}' is required",
            field
        ))),
        _ => Ok(()),
    }
}

/// Service layer for Task business logic
#[derive(Clone)]
pub struct TaskService<R: TaskRepository> {
    repository: Arc<R>,
}

impl<R: TaskRepository> TaskService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new task with validation
    #[instrument(skip(self, input), fields(task_title = %input.title))]
    pub async fn create_task(&self, input: CreateTask) -> TaskResult<TaskDto> {
        require("title", Some(input.title.as_str()))?;
        input
            .validate()
            .map_err(|e| TaskError::Validation(e.to_string()))?;

        let task = self.repository.create(input).await?;
        Ok(task.into())
    }

    /// Get a task by ID
    #[instrument(skip(self), fields(task_id = %id))]
    pub async fn get_task(&self, id: i64) -> TaskResult<TaskDto> {
        self.repository
            .get_by_id(id)
            .await?
            .map(TaskDto::from)
            .ok_or(TaskError::NotFound(id))
    }

    /// List all tasks in ascending id order
    #[instrument(skip(self))]
    pub async fn list_tasks(&self) -> TaskResult<Vec<TaskDto>> {
        let tasks = self.repository.list().await?;
        Ok(tasks.into_iter().map(TaskDto::from).collect())
    }

    /// Update a task
    #[instrument(skip(self, input), fields(task_id = %id))]
    pub async fn update_task(&self, id: i64, input: UpdateTask) -> TaskResult<TaskDto> {
        require("title", input.title.as_deref())?;
        input
            .validate()
            .map_err(|e| TaskError::Validation(e.to_string()))?;

        let task = self.repository.update(id, input).await?;
        Ok(task.into())
    }

    /// Delete a task
    #[instrument(skip(self), fields(task_id = %id))]
    pub async fn delete_task(&self, id: i64) -> TaskResult<()> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(TaskError::NotFound(id));
        }

        Ok(())
    }
}
