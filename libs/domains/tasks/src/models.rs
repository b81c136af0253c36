use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Task entity - represents a CRM follow-up item
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub assigned_to: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub created_at: NaiveDateTime,
    pub last_updated_by: Option<String>,
    pub last_updated_at: NaiveDateTime,
}

impl Task {
    /// Apply a partial update; `last_updated_at` is stamped by the repository.
    pub fn apply_update(&mut self, update: UpdateTask) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(priority) = update.priority {
            self.priority = priority;
        }
        if let Some(assigned_to) = update.assigned_to {
            self.assigned_to = assigned_to;
        }
        if let Some(due_date) = update.due_date {
            self.due_date = due_date;
        }
        if let Some(last_updated_by) = update.last_updated_by {
            self.last_updated_by = last_updated_by;
        }
    }
}

/// Task as exchanged over HTTP
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskDto {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub assigned_to: Option<String>,
    #[serde(default, with = "wire_format::date")]
    #[schema(value_type = Option<String>, format = Date, example = "2024-03-01")]
    pub due_date: Option<NaiveDate>,
    #[serde(with = "wire_format::timestamp")]
    #[schema(value_type = String, example = "2024-03-01T09:30:00Z")]
    pub created_at: NaiveDateTime,
    pub last_updated_by: Option<String>,
    #[serde(with = "wire_format::timestamp")]
    #[schema(value_type = String, example = "2024-03-01T09:30:00Z")]
    pub last_updated_at: NaiveDateTime,
}

impl From<Task> for TaskDto {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            title: task.title,
            description: task.description,
            status: task.status,
            priority: task.priority,
            assigned_to: task.assigned_to,
            due_date: task.due_date,
            created_at: task.created_at,
            last_updated_by: task.last_updated_by,
            last_updated_at: task.last_updated_at,
        }
    }
}

/// DTO for creating a new task
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTask {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    pub description: Option<String>,
    #[validate(length(max = 50))]
    pub status: Option<String>,
    #[validate(length(max = 50))]
    pub priority: Option<String>,
    #[validate(length(max = 255))]
    pub assigned_to: Option<String>,
    #[serde(default, with = "wire_format::date")]
    #[schema(value_type = Option<String>, format = Date, example = "2024-03-01")]
    pub due_date: Option<NaiveDate>,
    #[validate(length(max = 255))]
    pub last_updated_by: Option<String>,
}

/// DTO for updating an existing task
///
/// Omitted fields are kept and `null` clears an optional field.
/// A `null` title counts as omitted.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTask {
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "wire_format::nullable::deserialize")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "wire_format::nullable::deserialize")]
    #[schema(value_type = Option<String>)]
    #[validate(length(max = 50))]
    pub status: Option<Option<String>>,
    #[serde(default, deserialize_with = "wire_format::nullable::deserialize")]
    #[schema(value_type = Option<String>)]
    #[validate(length(max = 50))]
    pub priority: Option<Option<String>>,
    #[serde(default, deserialize_with = "wire_format::nullable::deserialize")]
    #[schema(value_type = Option<String>)]
    #[validate(length(max = 255))]
    pub assigned_to: Option<Option<String>>,
    #[serde(default, deserialize_with = "wire_format::nullable::deserialize")]
    #[schema(value_type = Option<String>, format = Date)]
    pub due_date: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "wire_format::nullable::deserialize")]
    #[schema(value_type = Option<String>)]
    #[validate(length(max = 255))]
    pub last_updated_by: Option<Option<String>>,
}
