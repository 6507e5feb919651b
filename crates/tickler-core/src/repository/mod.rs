use crate::db::DbPool;
use crate::error::CoreError;
use crate::models::{NewTaskData, Task, TaskFilter};
use async_trait::async_trait;
use uuid::Uuid;

pub mod tasks;

/// Storage for the task list.
#[async_trait]
pub trait TaskRepository {
    async fn add_task(&self, data: NewTaskData) -> Result<Task, CoreError>;
    async fn find_task_by_id(&self, id: Uuid) -> Result<Option<Task>, CoreError>;
    async fn find_tasks_by_short_id_prefix(&self, short_id: &str) -> Result<Vec<Task>, CoreError>;
    async fn find_tasks(&self, filter: TaskFilter) -> Result<Vec<Task>, CoreError>;
    /// Marks a task done or reopens it.
    async fn set_completed(&self, id: Uuid, completed: bool) -> Result<Task, CoreError>;
    async fn delete_task(&self, id: Uuid) -> Result<(), CoreError>;
    /// Deletes every completed task and returns the ids that were removed.
    async fn clear_completed(&self) -> Result<Vec<Uuid>, CoreError>;
    /// Open tasks carrying both a due date and a due time.
    async fn find_pending_with_due_time(&self) -> Result<Vec<Task>, CoreError>;
}

/// SQLite implementation of the repository pattern
pub struct SqliteRepository {
    pool: DbPool,
}

impl SqliteRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub(crate) fn pool(&self) -> &DbPool {
        &self.pool
    }
}
