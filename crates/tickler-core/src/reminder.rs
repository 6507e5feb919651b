//! Reminder bookkeeping for due tasks.
//!
//! The watcher polls the task list on a timer; [`ReminderTracker`] remembers
//! which tasks already fired so each one is announced at most once until it
//! leaves the open list (completed, deleted or cleared).

use chrono::NaiveDateTime;
use std::collections::HashSet;
use uuid::Uuid;

use crate::models::Task;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    pub task_id: Uuid,
    pub text: String,
    pub due_at: NaiveDateTime,
}

impl Reminder {
    pub fn message(&self) -> String {
        format!("Your task \"{}\" is due!", self.text)
    }
}

#[derive(Debug, Default)]
pub struct ReminderTracker {
    triggered: HashSet<Uuid>,
}

impl ReminderTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns reminders for open tasks whose due instant is at or before `now`
    /// and that have not fired yet, marking each as fired.
    pub fn due_reminders<'a, I>(&mut self, tasks: I, now: NaiveDateTime) -> Vec<Reminder>
    where
        I: IntoIterator<Item = &'a Task>,
    {
        let mut reminders = Vec::new();
        for task in tasks {
            if task.completed {
                continue;
            }
            let Some(due_at) = task.due_at() else {
                continue;
            };
            if now >= due_at && self.triggered.insert(task.id) {
                tracing::info!(id = %task.id, due_at = %due_at, "reminder triggered");
                reminders.push(Reminder {
                    task_id: task.id,
                    text: task.text.clone(),
                    due_at,
                });
            }
        }
        reminders
    }

    /// Drops fired markers for tasks no longer among `open_tasks`, e.g. tasks
    /// completed or deleted since the last poll. Reopened tasks can then fire again.
    pub fn forget_missing<'a, I>(&mut self, open_tasks: I)
    where
        I: IntoIterator<Item = &'a Task>,
    {
        let open: HashSet<Uuid> = open_tasks.into_iter().map(|t| t.id).collect();
        self.triggered.retain(|id| open.contains(id));
    }

    pub fn is_triggered(&self, id: Uuid) -> bool {
        self.triggered.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.triggered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triggered.is_empty()
    }
}
