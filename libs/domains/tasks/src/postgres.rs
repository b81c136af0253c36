use async_trait::async_trait;
use database::clock;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::{
    entity,
    error::{TaskError, TaskResult},
    models::{CreateTask, Task, UpdateTask},
    repository::TaskRepository,
};

/// PostgreSQL implementation of TaskRepository
#[derive(Debug, Clone)]
pub struct PgTaskRepository {
    db: DatabaseConnection,
}

impl PgTaskRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TaskRepository for PgTaskRepository {
    async fn create(&self, input: CreateTask) -> TaskResult<Task> {
        let model = input
            .into_active_model(clock::now())
            .insert(&self.db)
            .await?;

        tracing::info!(task_id = model.id, "Created task");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i64) -> TaskResult<Option<Task>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Task::from))
    }

    async fn list(&self) -> TaskResult<Vec<Task>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Task::from).collect())
    }

    async fn update(&self, id: i64, input: UpdateTask) -> TaskResult<Task> {
        let txn = self.db.begin().await?;

        let mut task: Task = entity::Entity::find_by_id(id)
            .lock_exclusive()
            .one(&txn)
            .await?
            .ok_or(TaskError::NotFound(id))?
            .into();

        task.apply_update(input);
        task.last_updated_at = clock::after(task.last_updated_at);

        let updated = entity::ActiveModel::from(entity::Model::from(task))
            .reset_all()
            .update(&txn)
            .await?;

        txn.commit().await?;

        tracing::info!(task_id = id, "Updated task");
        Ok(updated.into())
    }

    async fn delete(&self, id: i64) -> TaskResult<bool> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected > 0 {
            tracing::info!(task_id = id, "Deleted task");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
