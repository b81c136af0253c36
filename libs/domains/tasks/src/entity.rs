use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

use crate::models::{CreateTask, Task};

/// Sea-ORM Entity for Tasks table
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tasks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub assigned_to: Option<String>,
    pub due_date: Option<Date>,
    pub created_at: DateTime,
    pub last_updated_by: Option<String>,
    pub last_updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// OpenAPI tag shared by every task route
    pub const TAG: &'static str = "tasks";
}

impl From<Model> for Task {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            status: model.status,
            priority: model.priority,
            assigned_to: model.assigned_to,
            due_date: model.due_date,
            created_at: model.created_at,
            last_updated_by: model.last_updated_by,
            last_updated_at: model.last_updated_at,
        }
    }
}

impl From<Task> for Model {
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

impl CreateTask {
    /// Insertable row; `created_at` and `last_updated_at` both start at `now`.
    pub fn into_active_model(self, now: DateTime) -> ActiveModel {
        ActiveModel {
            id: NotSet,
            title: Set(self.title),
            description: Set(self.description),
            status: Set(self.status),
            priority: Set(self.priority),
            assigned_to: Set(self.assigned_to),
            due_date: Set(self.due_date),
            created_at: Set(now),
            last_updated_by: Set(self.last_updated_by),
            last_updated_at: Set(now),
        }
    }
}
