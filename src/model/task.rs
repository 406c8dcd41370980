/// Visual classification of a row, derived from a task's completion flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Pending,
    Completed,
}

impl Category {
    /// The category for a completion flag
    pub fn of(completed: bool) -> Self {
        if completed {
            Category::Completed
        } else {
            Category::Pending
        }
    }

    /// Status text shown in the STATUS column
    pub fn label(self) -> &'static str {
        match self {
            Category::Pending => "PENDING",
            Category::Completed => "COMPLETED",
        }
    }

    /// Single-cell marker drawn before the label
    pub fn symbol(self) -> &'static str {
        match self {
            Category::Pending => "\u{25CF}",   // ●
            Category::Completed => "\u{2713}", // ✓
        }
    }

    /// Full status column text, e.g. `● PENDING`
    pub fn status(self) -> String {
        format!("{} {}", self.symbol(), self.label())
    }

    pub fn is_completed(self) -> bool {
        self == Category::Completed
    }
}

/// A single to-do item.
///
/// Tasks carry no identifier: a task is addressed by its position in the
/// [`TaskStore`](super::store::TaskStore) at the time of an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    text: String,
    /// Completion flag, the only mutable part of a task
    pub completed: bool,
}

impl Task {
    /// Create a pending task. Callers are expected to have trimmed and
    /// validated `text` already.
    pub fn new(text: impl Into<String>) -> Self {
        Task {
            text: text.into(),
            completed: false,
        }
    }

    /// The task's display text (immutable after creation)
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn category(&self) -> Category {
        Category::of(self.completed)
    }
}
