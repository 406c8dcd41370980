use std::collections::BTreeSet;
use std::fmt;

use super::task::Task;

/// Error type for store operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("task text is empty")]
    EmptyText,
    #[error("task index {index} out of range (store has {len} tasks)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Task counters shown in the summary row
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total Tasks: {} | Completed: {} | Pending: {}",
            self.total, self.completed, self.pending
        )
    }
}

/// Ordered in-memory collection of tasks, the source of truth for the
/// session. Insertion order is preserved and tasks are addressed by index.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        TaskStore::default()
    }

    /// Append a pending task and return its index.
    ///
    /// Leading and trailing whitespace is trimmed; text that is empty after
    /// trimming is rejected with [`StoreError::EmptyText`].
    pub fn add(&mut self, text: &str) -> Result<usize, StoreError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(StoreError::EmptyText);
        }
        let index = self.tasks.len();
        self.tasks.push(Task::new(text));
        Ok(index)
    }

    /// Set the completion flag of the task at `index`.
    pub fn set_completed(&mut self, index: usize, value: bool) -> Result<(), StoreError> {
        self.get_mut(index)?.completed = value;
        Ok(())
    }

    /// Flip the completion flag of the task at `index`, returning the new value.
    pub fn toggle(&mut self, index: usize) -> Result<bool, StoreError> {
        let task = self.get_mut(index)?;
        task.completed = !task.completed;
        Ok(task.completed)
    }

    /// Remove every task at the given positions in one step.
    ///
    /// All indices are validated against the current length before anything
    /// is removed, so a bad index leaves the store untouched. Removal runs
    /// from the highest index down so earlier removals never shift a
    /// position that is still pending.
    pub fn remove_at(&mut self, indices: &BTreeSet<usize>) -> Result<(), StoreError> {
        let len = self.tasks.len();
        if let Some(&index) = indices.iter().find(|&&i| i >= len) {
            return Err(StoreError::IndexOutOfRange { index, len });
        }
        for &index in indices.iter().rev() {
            self.tasks.remove(index);
        }
        Ok(())
    }

    /// Remove all tasks. Succeeds on an empty store.
    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn size(&self) -> usize {
        self.tasks.len()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    pub fn pending_count(&self) -> usize {
        self.size() - self.completed_count()
    }

    /// Current counters, derived fresh from the tasks
    pub fn summary(&self) -> Summary {
        let total = self.size();
        let completed = self.completed_count();
        Summary {
            total,
            completed,
            pending: total - completed,
        }
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut Task, StoreError> {
        let len = self.tasks.len();
        self.tasks
            .get_mut(index)
            .ok_or(StoreError::IndexOutOfRange { index, len })
    }
}
