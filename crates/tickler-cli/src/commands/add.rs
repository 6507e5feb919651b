use anyhow::Result;
use owo_colors::{OwoColorize, Style};
use tickler_core::models::NewTaskData;
use tickler_core::repository::TaskRepository;

use crate::cli::AddCommand;
use crate::util::{local_now, parse_due_date, parse_due_time};
use crate::views::table::format_due;

pub async fn add_task(repo: &impl TaskRepository, command: AddCommand) -> Result<()> {
    let input = command.text.join(" ");
    let due_date = command.date.as_deref().map(parse_due_date).transpose()?;
    let due_time = command.time.as_deref().map(parse_due_time).transpose()?;

    let data = if command.raw {
        NewTaskData {
            text: input.trim().to_string(),
            due_date,
            due_time,
        }
    } else {
        NewTaskData::from_input(&input, due_date, due_time, local_now())?
    };
    let extracted = !command.raw
        && due_date.is_none()
        && due_time.is_none()
        && (data.due_date.is_some() || data.due_time.is_some());

    let added_task = repo.add_task(data).await?;

    let success_style = Style::new().green().bold();
    let info_style = Style::new().blue();
    let subtle_style = Style::new().bright_black();

    println!(
        "{} Created task: {}",
        "✓".style(success_style),
        added_task.text.bright_white().bold()
    );
    println!(
        "  {} Task ID: {}",
        "→".style(info_style),
        added_task.short_id().yellow()
    );

    let due = format_due(added_task.due_date, added_task.due_time);
    if !due.is_empty() {
        println!("  {} Due: {}", "→".style(info_style), due.cyan());
    }
    if extracted {
        println!(
            "  {} Picked up from the text: {}{}",
            "→".style(info_style),
            added_task
                .due_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            added_task
                .due_time
                .map(|t| t.format(" %H:%M").to_string())
                .unwrap_or_default()
        );
    }
    if added_task.due_at().is_some() {
        println!(
            "   {} Run `tickler watch` to be reminded when it is due",
            "•".style(subtle_style)
        );
    }

    Ok(())
}
