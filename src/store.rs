use std::collections::HashSet;

use tracing::{debug, warn};

use crate::error::{ErrorCode, TasklistError};
use crate::format::Formatter;
use crate::models::{Filter, Task, INITIAL_STATUS};
use crate::storage::KeyValueStorage;

/// Storage key holding the serialized task array.
pub const TASKS_KEY: &str = "tasks";

#[derive(Debug, Default, Clone, PartialEq, serde::Serialize)]
pub struct TaskSummary {
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
    pub percentage: f64,
}

/// Owns the task collection and keeps it written through to storage.
///
/// Every mutating call persists the whole collection before returning, so the
/// stored value always mirrors `tasks()`. Lookups by an unknown id are silent
/// no-ops; only the storage backend can produce errors.
pub struct TaskStore<S: KeyValueStorage> {
    storage: S,
    formatter: Formatter,
    tasks: Vec<Task>,
}

impl<S: KeyValueStorage> TaskStore<S> {
    /// Load the collection from `storage`. Absent or malformed data yields an empty list.
    pub fn open(storage: S, formatter: Formatter) -> Result<Self, TasklistError> {
        let tasks = match storage.get(TASKS_KEY)? {
            Some(raw) => decode_tasks(&raw),
            None => Vec::new(),
        };
        debug!(count = tasks.len(), "loaded tasks");
        Ok(Self {
            storage,
            formatter,
            tasks,
        })
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    pub fn create(&mut self, description: &str, due_date: Option<&str>) -> Result<Task, TasklistError> {
        let task = Task {
            id: self.generate_id(),
            description: self.formatter.format_description(description),
            due_date: self.formatter.format_due_date(due_date),
            completed: false,
            status: INITIAL_STATUS.to_string(),
        };
        let mut next = self.tasks.clone();
        next.push(task.clone());
        self.commit(next)?;
        debug!(id = %task.id, "created task");
        Ok(task)
    }

    /// Replace a task's description, normalized the same way as on create.
    pub fn edit(&mut self, id: &str, new_description: &str) -> Result<Option<Task>, TasklistError> {
        let description = self.formatter.format_description(new_description);
        self.update(id, |task| task.description = description)
    }

    /// Remove the task with `id`. Persists even when nothing matched.
    pub fn delete(&mut self, id: &str) -> Result<(), TasklistError> {
        let next = self.tasks.iter().filter(|t| t.id != id).cloned().collect();
        self.commit(next)
    }

    pub fn toggle_completion(&mut self, id: &str) -> Result<Option<Task>, TasklistError> {
        self.update(id, |task| task.completed = !task.completed)
    }

    /// Drop every task. Skips the write when the list is already empty.
    pub fn clear_all(&mut self) -> Result<(), TasklistError> {
        if self.tasks.is_empty() {
            return Ok(());
        }
        self.commit(Vec::new())
    }

    /// Tasks matching `criterion` (`all`, `pending`, `completed`) in insertion order.
    /// Unknown criteria match nothing.
    pub fn filter(&self, criterion: &str) -> Vec<Task> {
        match Filter::from_str(criterion) {
            Some(filter) => self.filter_by(filter),
            None => Vec::new(),
        }
    }

    pub fn filter_by(&self, filter: Filter) -> Vec<Task> {
        self.tasks.iter().filter(|t| filter.matches(t)).cloned().collect()
    }

    /// Completion counts over the whole collection.
    pub fn summary(&self) -> TaskSummary {
        let completed = self.tasks.iter().filter(|t| t.completed).count();
        let total = self.tasks.len();
        TaskSummary {
            total,
            pending: total - completed,
            completed,
            percentage: if total > 0 {
                (completed as f64 / total as f64) * 100.0
            } else {
                0.0
            },
        }
    }

    /// Resolve a task reference: exact id, then unique id prefix.
    pub fn resolve(&self, reference: &str) -> Result<&Task, TasklistError> {
        if let Some(task) = self.get(reference) {
            return Ok(task);
        }
        if reference.is_empty() {
            return Err(TasklistError::task_not_found(reference));
        }

        let matches: Vec<&Task> = self
            .tasks
            .iter()
            .filter(|t| t.id.starts_with(reference))
            .collect();

        match matches.as_slice() {
            [] => Err(TasklistError::task_not_found(reference)),
            [task] => Ok(*task),
            _ => {
                let candidates: Vec<String> = matches
                    .iter()
                    .map(|t| format!("{} ({})", t.description, t.id))
                    .collect();
                Err(TasklistError::ambiguous_ref(reference, &candidates))
            }
        }
    }

    fn generate_id(&self) -> String {
        loop {
            let id = ulid::Ulid::new().to_string();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }

    /// Apply `change` to a copy of the task with `id` and commit it. Unknown ids write nothing.
    fn update(&mut self, id: &str, change: impl FnOnce(&mut Task)) -> Result<Option<Task>, TasklistError> {
        let Some(index) = self.tasks.iter().position(|t| t.id == id) else {
            return Ok(None);
        };
        let mut next = self.tasks.clone();
        change(&mut next[index]);
        let updated = next[index].clone();
        self.commit(next)?;
        Ok(Some(updated))
    }

    /// Persist `next` and only then make it the live collection.
    /// A failed write leaves both memory and storage at their previous state.
    fn commit(&mut self, next: Vec<Task>) -> Result<(), TasklistError> {
        let encoded = serde_json::to_string(&next)?;
        self.storage.set(TASKS_KEY, &encoded).map_err(|e| {
            TasklistError::new(ErrorCode::StorageError, format!("Failed to save tasks: {}", e.message))
        })?;
        self.tasks = next;
        debug!(count = self.tasks.len(), "persisted tasks");
        Ok(())
    }
}

fn decode_tasks(raw: &str) -> Vec<Task> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    match serde_json::from_str::<Vec<Task>>(raw) {
        Ok(tasks) => {
            let mut seen = HashSet::new();
            let total = tasks.len();
            let unique: Vec<Task> = tasks.into_iter().filter(|t| seen.insert(t.id.clone())).collect();
            if unique.len() != total {
                warn!(dropped = total - unique.len(), "stored task list has duplicate ids; keeping first occurrences");
            }
            unique
        }
        Err(e) => {
            warn!(error = %e, "stored task list is unreadable; starting empty");
            Vec::new()
        }
    }
}
