use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Could not access the task database: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Could not set up the task database schema: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Could not create the task database directory: {0}")]
    Io(#[from] std::io::Error),

    #[error("Task not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Short id and text of every task sharing the typed prefix.
    #[error("More than one task starts with that ID")]
    AmbiguousId(Vec<(String, String)>),
}
