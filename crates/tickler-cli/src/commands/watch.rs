use anyhow::Result;
use owo_colors::{OwoColorize, Style};
use std::io::Write;
use std::time::Duration;
use tickler_core::reminder::ReminderTracker;
use tickler_core::repository::TaskRepository;

use crate::cli::WatchCommand;
use crate::config::Config;
use crate::util::local_now;

pub async fn watch(repo: &impl TaskRepository, command: WatchCommand, config: &Config) -> Result<()> {
    let mut tracker = ReminderTracker::new();

    if command.once {
        let fired = check_reminders(repo, &mut tracker, config.bell).await?;
        if fired == 0 {
            println!("Nothing is due.");
        }
        return Ok(());
    }

    let secs = command.interval.unwrap_or(config.check_interval_secs).max(1);
    println!("Watching for due tasks every {secs}s (Ctrl+C to stop)");
    tracing::debug!(interval_secs = secs, "reminder watcher started");

    let mut ticker = tokio::time::interval(Duration::from_secs(secs));
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                check_reminders(repo, &mut tracker, config.bell).await?;
            }
            _ = tokio::signal::ctrl_c() => {
                println!("Stopped watching.");
                return Ok(());
            }
        }
    }
}

/// One poll: announce every open task that has come due since the last one.
async fn check_reminders(
    repo: &impl TaskRepository,
    tracker: &mut ReminderTracker,
    bell: bool,
) -> Result<usize> {
    let tasks = repo.find_pending_with_due_time().await?;
    tracker.forget_missing(&tasks);

    let reminders = tracker.due_reminders(&tasks, local_now());
    tracing::debug!(
        open = tasks.len(),
        fired = reminders.len(),
        already_fired = tracker.len(),
        "checked reminders"
    );
    let alarm_style = Style::new().red().bold();
    for reminder in &reminders {
        println!(
            "{} {} {}",
            "⏰ ALARM!".style(alarm_style),
            reminder.message(),
            format!("(due {})", reminder.due_at.format("%Y-%m-%d %H:%M")).bright_black()
        );
        if bell {
            print!("\x07");
            std::io::stdout().flush()?;
        }
    }
    Ok(reminders.len())
}
