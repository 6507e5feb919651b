use anyhow::Result;
use tickler_core::repository::TaskRepository;

pub async fn clear_completed(repo: &impl TaskRepository) -> Result<()> {
    let removed = repo.clear_completed().await?;
    match removed.len() {
        0 => println!("No completed tasks to clear."),
        1 => println!("Cleared 1 completed task."),
        n => println!("Cleared {n} completed tasks."),
    }
    Ok(())
}
