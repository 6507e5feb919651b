use anyhow::{anyhow, Result};
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use chrono_english::{parse_date_string, Dialect};
use tickler_core::error::CoreError;
use tickler_core::extract::parse_time_phrase;
use tickler_core::repository::TaskRepository;
use uuid::Uuid;

pub async fn resolve_task_id(repo: &impl TaskRepository, short_id: &str) -> Result<Uuid> {
    if short_id.len() < 2 {
        return Err(anyhow!(CoreError::InvalidInput(
            "Short ID must be at least 2 characters long.".to_string()
        )));
    }
    let tasks = repo.find_tasks_by_short_id_prefix(short_id).await?;
    if tasks.len() == 1 {
        Ok(tasks[0].id)
    } else if tasks.is_empty() {
        Err(anyhow!(CoreError::NotFound(format!(
            "No task found with ID prefix '{}'",
            short_id
        ))))
    } else {
        let task_info: Vec<(String, String)> = tasks
            .into_iter()
            .map(|t| (t.short_id(), t.text))
            .collect();
        Err(anyhow!(CoreError::AmbiguousId(task_info)))
    }
}

/// The local wall clock, which every relative phrase is resolved against.
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Parses a manually entered due date: ISO `YYYY-MM-DD` first, then anything
/// chrono-english understands ("next friday", "March 3").
pub fn parse_due_date(date_str: &str) -> Result<NaiveDate> {
    let input = date_str.trim();
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(date);
    }
    parse_date_string(input, Local::now(), Dialect::Us)
        .map(|dt| dt.date_naive())
        .map_err(|e| {
            anyhow!(CoreError::InvalidInput(format!(
                "Failed to parse due date '{}': {}",
                date_str, e
            )))
        })
}

pub fn parse_due_time(time_str: &str) -> Result<NaiveTime> {
    parse_time_phrase(time_str).ok_or_else(|| {
        anyhow!(CoreError::InvalidInput(format!(
            "Invalid time format: '{}'\n\nSupported formats:\n  • 24-hour: '14:30', '09:00'\n  • 12-hour: '2:30pm', '9am'\n  • Special: 'noon', 'midnight'",
            time_str
        )))
    })
}

/// Parses a reference time such as `2024-01-15 09:00` or `2024-01-15T09:00`.
pub fn parse_reference_time(input: &str) -> Result<NaiveDateTime> {
    let input = input.trim();
    ["%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(input, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| anyhow!(CoreError::InvalidInput(format!("Invalid reference time: '{}'", input))))
}
