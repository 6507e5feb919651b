use anyhow::Result;
use tickler_core::models::TaskFilter;
use tickler_core::repository::TaskRepository;

use crate::cli::ListCommand;
use crate::config::Config;
use crate::util::local_now;
use crate::views::table::display_tasks;

pub async fn list_tasks(repo: &impl TaskRepository, command: ListCommand, config: &Config) -> Result<()> {
    let filter = if command.all {
        TaskFilter::All
    } else if command.completed {
        TaskFilter::Completed
    } else {
        config.default_filter
    };

    let tasks = repo.find_tasks(filter).await?;
    display_tasks(&tasks, local_now());

    Ok(())
}
