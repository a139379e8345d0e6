//! Task tracker store.
//!
//! An insertion-ordered list of tasks with create / toggle / edit / delete.
//! The whole collection round-trips through one JSON record after every
//! mutation; a malformed or absent record loads as an empty list. Unknown
//! ids are no-ops everywhere.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::events::{Event, Observers};
use crate::storage::KvStore;

pub const KEY_TASKS: &str = "tasks";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creation time as zero-padded `HH:MM` local time, for list display.
    pub fn created_hhmm(&self) -> String {
        self.created_at.with_timezone(&Local).format("%H:%M").to_string()
    }
}

pub struct TaskStore {
    kv: KvStore,
    tasks: Vec<Task>,
    observers: Observers,
}

impl TaskStore {
    /// Parse the persisted collection; malformed JSON loads as empty.
    pub fn load(kv: KvStore) -> Self {
        let tasks = kv
            .get(KEY_TASKS)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();
        Self {
            kv,
            tasks,
            observers: Observers::default(),
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: Fn(&Event) + 'static,
    {
        self.observers.subscribe(listener);
    }

    /// Append a new incomplete task. Whitespace-only text is a no-op.
    pub fn add(&mut self, text: &str) -> Option<&Task> {
        if text.trim().is_empty() {
            return None;
        }
        let task = Task {
            id: Uuid::new_v4().to_string(),
            text: text.to_string(),
            completed: false,
            created_at: Utc::now(),
        };
        self.tasks.push(task);
        self.after_mutation();
        self.tasks.last()
    }

    /// Flip the completed flag. Returns false (and changes nothing) for an
    /// unknown id.
    pub fn toggle_complete(&mut self, id: &str) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                self.after_mutation();
                true
            }
            None => false,
        }
    }

    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() != before {
            self.after_mutation();
            true
        } else {
            false
        }
    }

    /// The current text of a task, for prefilling an edit field.
    pub fn start_edit(&self, id: &str) -> Option<&str> {
        self.get(id).map(|t| t.text.as_str())
    }

    /// Replace a task's text in place, preserving id, completion state, and
    /// creation time. A trimmed-empty replacement is discarded.
    pub fn save_edit(&mut self, id: &str, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.text = text.to_string();
                self.after_mutation();
                true
            }
            None => false,
        }
    }

    fn after_mutation(&mut self) {
        match serde_json::to_string(&self.tasks) {
            Ok(raw) => {
                if let Err(e) = self.kv.set(KEY_TASKS, &raw) {
                    tracing::warn!(error = %e, "failed to persist tasks; keeping in-memory list");
                }
            }
            Err(e) => tracing::warn!(error = %e, "failed to serialize tasks"),
        }
        self.observers.notify(&Event::TasksChanged {
            count: self.tasks.len(),
            at: Utc::now(),
        });
    }
}
