use anyhow::Result;
use tickler_core::repository::TaskRepository;

use crate::cli::{DoCommand, UndoCommand};
use crate::util::resolve_task_id;

pub async fn do_task(repo: &impl TaskRepository, command: DoCommand) -> Result<()> {
    let task_id = resolve_task_id(repo, &command.id).await?;
    let task = repo.set_completed(task_id, true).await?;
    println!("Completed task: '{}'", task.text);
    Ok(())
}

pub async fn undo_task(repo: &impl TaskRepository, command: UndoCommand) -> Result<()> {
    let task_id = resolve_task_id(repo, &command.id).await?;
    let task = repo.set_completed(task_id, false).await?;
    println!("Reopened task: '{}'", task.text);
    Ok(())
}
