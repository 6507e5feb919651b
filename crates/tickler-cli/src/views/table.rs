use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use chrono_humanize::HumanTime;
use comfy_table::{Attribute, Cell, Color, Row, Table};
use tickler_core::models::Task;

pub fn display_tasks(tasks: &[Task], now: NaiveDateTime) {
    if tasks.is_empty() {
        println!("No tasks found.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Task", "Due", "Status"]);

    for task in tasks {
        let mut row = Row::new();
        row.add_cell(Cell::new(task.short_id()));

        let mut text_cell = Cell::new(&task.text);
        if task.completed {
            text_cell = text_cell
                .add_attribute(Attribute::CrossedOut)
                .fg(Color::DarkGrey);
        }
        row.add_cell(text_cell);

        let due_text = format_due(task.due_date, task.due_time);
        let due_cell = match (task.due_at(), task.due_date) {
            _ if due_text.is_empty() => Cell::new("None"),
            (Some(due_at), _) => {
                let text = format!("{} ({})", due_text, HumanTime::from(due_at - now));
                if task.completed {
                    Cell::new(text)
                } else if due_at <= now {
                    Cell::new(text).fg(Color::Red) // Overdue
                } else if due_at.date() == now.date() {
                    Cell::new(text).fg(Color::Yellow) // Due today
                } else {
                    Cell::new(text)
                }
            }
            (None, Some(date)) if !task.completed && date < now.date() => {
                Cell::new(due_text).fg(Color::Red)
            }
            (None, Some(date)) if !task.completed && date == now.date() => {
                Cell::new(due_text).fg(Color::Yellow)
            }
            _ => Cell::new(due_text),
        };
        row.add_cell(due_cell);

        let status_cell = if task.completed {
            Cell::new("Completed").fg(Color::Green)
        } else {
            Cell::new("Pending")
        };
        row.add_cell(status_cell);

        table.add_row(row);
    }

    println!("{table}");
}

/// "Tue, Jan 16, 2024 at 3:00 PM", either half alone, or empty.
pub fn format_due(date: Option<NaiveDate>, time: Option<NaiveTime>) -> String {
    let date = date.map(|d| d.format("%a, %b %-d, %Y").to_string());
    let time = time.map(|t| t.format("%-I:%M %p").to_string());
    match (date, time) {
        (Some(date), Some(time)) => format!("{date} at {time}"),
        (Some(date), None) => date,
        (None, Some(time)) => time,
        (None, None) => String::new(),
    }
}
