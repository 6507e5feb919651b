use clap::{Parser, Subcommand};

/// Tickler: a to-do list that reads due dates out of plain English
#[derive(Parser, Debug)]
#[command(name = "tickler", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Add a new task ("Call mom tomorrow at 5pm")
    Add(AddCommand),
    /// List tasks
    List(ListCommand),
    /// Mark a task as completed
    Do(DoCommand),
    /// Reopen a completed task
    Undo(UndoCommand),
    /// Delete a task
    Delete(DeleteCommand),
    /// Delete all completed tasks
    Clear,
    /// Show what would be extracted from a task text, without saving anything
    Parse(ParseCommand),
    /// Watch for due tasks and announce them
    Watch(WatchCommand),
}

#[derive(Parser, Debug, Clone)]
pub struct AddCommand {
    /// The task text; dates and times in it are picked up automatically
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,
    /// Due date (e.g. '2024-03-01', 'next friday'); disables extraction from the text
    #[arg(short, long)]
    pub date: Option<String>,
    /// Due time (e.g. '14:30', '5pm', 'noon'); disables extraction from the text
    #[arg(short, long)]
    pub time: Option<String>,
    /// Store the text as-is without looking for dates and times
    #[arg(long)]
    pub raw: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct ListCommand {
    /// Include completed tasks
    #[arg(short, long, conflicts_with = "completed")]
    pub all: bool,
    /// Only show completed tasks
    #[arg(short, long)]
    pub completed: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct DoCommand {
    /// The ID of the task to mark as completed
    pub id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct UndoCommand {
    /// The ID of the task to reopen
    pub id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct DeleteCommand {
    /// The ID of the task to delete
    pub id: String,
    /// Force deletion without confirmation
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct ParseCommand {
    /// The text to analyse
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,
    /// Reference time instead of the current local time ('2024-01-15 09:00')
    #[arg(long)]
    pub now: Option<String>,
    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct WatchCommand {
    /// Seconds between checks (defaults to the configured interval)
    #[arg(short, long)]
    pub interval: Option<u64>,
    /// Check once and exit
    #[arg(long)]
    pub once: bool,
}
