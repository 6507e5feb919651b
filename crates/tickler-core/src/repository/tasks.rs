use crate::error::CoreError;
use crate::models::{NewTaskData, Task, TaskFilter};
use crate::repository::SqliteRepository;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{QueryBuilder, Sqlite};
use uuid::Uuid;

#[async_trait]
impl super::TaskRepository for SqliteRepository {
    async fn add_task(&self, data: NewTaskData) -> Result<Task, CoreError> {
        if data.text.trim().is_empty() {
            return Err(CoreError::InvalidInput("Task text cannot be empty.".to_string()));
        }

        let task = Task {
            id: Uuid::new_v4(),
            text: data.text,
            due_date: data.due_date,
            due_time: data.due_time,
            completed: false,
            created_at: Utc::now(),
            completed_at: None,
        };

        sqlx::query(
            r#"INSERT INTO tasks (id, text, due_date, due_time, completed, created_at, completed_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(task.id)
        .bind(&task.text)
        .bind(task.due_date)
        .bind(task.due_time)
        .bind(task.completed)
        .bind(task.created_at)
        .bind(task.completed_at)
        .execute(self.pool())
        .await?;

        tracing::debug!(id = %task.id, "task added");
        Ok(task)
    }

    async fn find_task_by_id(&self, id: Uuid) -> Result<Option<Task>, CoreError> {
        let task = sqlx::query_as("SELECT * FROM tasks WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool())
            .await?;
        Ok(task)
    }

    async fn find_tasks_by_short_id_prefix(&self, short_id: &str) -> Result<Vec<Task>, CoreError> {
        // ids are stored as blobs; compare against their hex form
        let mut pattern: String = short_id
            .chars()
            .filter(|c| *c != '-')
            .map(|c| c.to_ascii_uppercase())
            .collect();
        // anything else (including LIKE wildcards) can never match an id
        if !pattern.chars().all(|c| c.is_ascii_hexdigit()) {
            return Ok(Vec::new());
        }
        pattern.push('%');

        let tasks: Vec<Task> = sqlx::query_as("SELECT * FROM tasks WHERE hex(id) LIKE ?")
            .bind(pattern)
            .fetch_all(self.pool())
            .await?;
        Ok(tasks)
    }

    async fn find_tasks(&self, filter: TaskFilter) -> Result<Vec<Task>, CoreError> {
        let mut query_builder: QueryBuilder<Sqlite> = QueryBuilder::new("SELECT * FROM tasks");
        match filter {
            TaskFilter::Pending => {
                query_builder.push(" WHERE completed = ").push_bind(false);
            }
            TaskFilter::Completed => {
                query_builder.push(" WHERE completed = ").push_bind(true);
            }
            TaskFilter::All => {}
        }
        query_builder.push(" ORDER BY created_at");

        let tasks = query_builder.build_query_as().fetch_all(self.pool()).await?;
        Ok(tasks)
    }

    async fn set_completed(&self, id: Uuid, completed: bool) -> Result<Task, CoreError> {
        let completed_at = completed.then(Utc::now);
        let result = sqlx::query("UPDATE tasks SET completed = $1, completed_at = $2 WHERE id = $3")
            .bind(completed)
            .bind(completed_at)
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound(id.to_string()));
        }

        self.find_task_by_id(id)
            .await?
            .ok_or_else(|| CoreError::NotFound(id.to_string()))
    }

    async fn delete_task(&self, id: Uuid) -> Result<(), CoreError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound(id.to_string()));
        }
        Ok(())
    }

    async fn clear_completed(&self) -> Result<Vec<Uuid>, CoreError> {
        let mut tx = self.pool().begin().await?;

        let ids: Vec<Uuid> = sqlx::query_scalar("SELECT id FROM tasks WHERE completed = $1")
            .bind(true)
            .fetch_all(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM tasks WHERE completed = $1")
            .bind(true)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(ids)
    }

    async fn find_pending_with_due_time(&self) -> Result<Vec<Task>, CoreError> {
        let tasks = sqlx::query_as(
            r#"SELECT * FROM tasks
            WHERE completed = $1 AND due_date IS NOT NULL AND due_time IS NOT NULL
            ORDER BY due_date, due_time"#,
        )
        .bind(false)
        .fetch_all(self.pool())
        .await?;
        Ok(tasks)
    }
}
