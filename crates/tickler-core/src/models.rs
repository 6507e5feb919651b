use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

use crate::error::CoreError;
use crate::extract::extract;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq, Eq)]
pub struct Task {
    pub id: Uuid,
    pub text: String,
    pub due_date: Option<NaiveDate>,
    pub due_time: Option<NaiveTime>,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// The wall-clock instant a reminder fires. Only tasks with both a date and
    /// a time have one.
    pub fn due_at(&self) -> Option<NaiveDateTime> {
        Some(self.due_date?.and_time(self.due_time?))
    }

    pub fn short_id(&self) -> String {
        self.id.simple().to_string()[..7].to_string()
    }
}

impl Default for Task {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            text: "".to_string(),
            due_date: None,
            due_time: None,
            completed: false,
            created_at: Utc::now(),
            completed_at: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTaskData {
    pub text: String,
    pub due_date: Option<NaiveDate>,
    pub due_time: Option<NaiveTime>,
}

impl NewTaskData {
    /// Builds a task from what the user typed.
    ///
    /// When neither a date nor a time was given explicitly, the text itself is
    /// searched for them; a hit replaces the text with what is left over, unless
    /// nothing is left, in which case the typed text is kept.
    pub fn from_input(
        raw: &str,
        manual_date: Option<NaiveDate>,
        manual_time: Option<NaiveTime>,
        now: NaiveDateTime,
    ) -> Result<Self, CoreError> {
        let text = raw.trim();
        if text.is_empty() {
            return Err(CoreError::InvalidInput("Please enter a task!".to_string()));
        }

        if manual_date.is_none() && manual_time.is_none() {
            let parsed = extract(text, now);
            if !parsed.is_empty() {
                let text = if parsed.clean_text.is_empty() {
                    text.to_string()
                } else {
                    parsed.clean_text
                };
                return Ok(Self {
                    text,
                    due_date: parsed.date,
                    due_time: parsed.time,
                });
            }
        }

        Ok(Self {
            text: text.to_string(),
            due_date: manual_date,
            due_time: manual_time,
        })
    }
}

/// Which tasks to list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskFilter {
    #[default]
    Pending,
    Completed,
    All,
}

#[derive(Error, Debug, PartialEq)]
#[error("Invalid task filter: {0}")]
pub struct ParseTaskFilterError(String);

impl FromStr for TaskFilter {
    type Err = ParseTaskFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(TaskFilter::Pending),
            "completed" | "done" => Ok(TaskFilter::Completed),
            "all" => Ok(TaskFilter::All),
            _ => Err(ParseTaskFilterError(s.to_string())),
        }
    }
}
