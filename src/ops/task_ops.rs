use std::collections::BTreeSet;

use crate::model::store::{StoreError, Summary, TaskStore};
use crate::model::task::Category;

/// Error type for user-triggered task operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("no task text entered")]
    EmptyText,
    #[error("{action} needs a selected task")]
    SelectionRequired { action: Action },
    #[error("no tasks to clear")]
    NothingToClear,
    /// The view and the store disagreed about a row index. This is a bug,
    /// never a user error.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// The selection-based commands, used to word notices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MarkComplete,
    Delete,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::MarkComplete => write!(f, "mark complete"),
            Action::Delete => write!(f, "delete"),
        }
    }
}

/// How a notice is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Warning,
    Info,
}

/// A message dialog for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn title(&self) -> &'static str {
        match self.kind {
            NoticeKind::Warning => "Warning",
            NoticeKind::Info => "Info",
        }
    }
}

impl ActionError {
    /// The dialog to show for this error, or `None` for internal errors that
    /// must not be presented as user mistakes.
    pub fn notice(&self) -> Option<Notice> {
        let (kind, message) = match self {
            ActionError::EmptyText => (NoticeKind::Warning, "Please enter a task!"),
            ActionError::SelectionRequired {
                action: Action::MarkComplete,
            } => (NoticeKind::Warning, "Please select a task!"),
            ActionError::SelectionRequired {
                action: Action::Delete,
            } => (NoticeKind::Warning, "Please select a task to delete!"),
            ActionError::NothingToClear => (NoticeKind::Info, "No tasks to clear!"),
            ActionError::Store(_) => return None,
        };
        Some(Notice {
            kind,
            message: message.to_string(),
        })
    }
}

/// A destructive operation waiting for the user's yes/no answer.
///
/// Holds everything needed to finish the operation, captured when the
/// dialog opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Confirmation {
    DeleteRows { rows: BTreeSet<usize> },
    ClearAll,
}

impl Confirmation {
    pub fn prompt(&self) -> &'static str {
        match self {
            Confirmation::DeleteRows { .. } => "Delete selected task(s)?",
            Confirmation::ClearAll => "Clear ALL tasks?",
        }
    }
}

/// The table and input field driven by a [`Session`].
///
/// Rows mirror the store position for position: row `i` always shows task `i`.
pub trait TaskView {
    fn append_row(&mut self, status: &str, text: &str, category: Category);
    fn set_row_status(&mut self, row: usize, status: &str, category: Category);
    /// Remove the given rows. Implementations must remove from the highest
    /// row down.
    fn remove_rows(&mut self, rows: &BTreeSet<usize>);
    fn remove_all_rows(&mut self);
    fn selected_rows(&self) -> BTreeSet<usize>;
    fn set_summary(&mut self, summary: Summary);
    fn clear_input(&mut self);
    fn focus_input(&mut self);
    fn input_text(&self) -> String;
}

/// One application session: owns the task store and applies user intent to
/// both the store and the view it is given.
#[derive(Debug, Default)]
pub struct Session {
    store: TaskStore,
}

impl Session {
    pub fn new() -> Self {
        Session::default()
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Add the view's input text as a new pending task.
    ///
    /// On empty input the view is left untouched, input included.
    pub fn add(&mut self, view: &mut impl TaskView) -> Result<usize, ActionError> {
        let raw = view.input_text();
        let index = self.store.add(&raw).map_err(|e| match e {
            StoreError::EmptyText => ActionError::EmptyText,
            other => ActionError::Store(other),
        })?;
        let task = &self.store.tasks()[index];
        let category = task.category();
        view.append_row(&category.status(), task.text(), category);
        view.clear_input();
        view.focus_input();
        tracing::debug!(index, text = task.text(), "task added");
        self.recompute_counters(view);
        Ok(index)
    }

    /// Mark every selected pending row completed. Rows already completed are
    /// left as they are. Returns the number of rows that changed.
    pub fn mark_complete(&mut self, view: &mut impl TaskView) -> Result<usize, ActionError> {
        let rows = view.selected_rows();
        if rows.is_empty() {
            return Err(ActionError::SelectionRequired {
                action: Action::MarkComplete,
            });
        }
        let len = self.store.size();
        if let Some(&index) = rows.iter().find(|&&row| row >= len) {
            return Err(StoreError::IndexOutOfRange { index, len }.into());
        }
        let mut changed = 0;
        for row in rows {
            if self.store.tasks()[row].completed {
                continue;
            }
            self.store.set_completed(row, true)?;
            let category = Category::Completed;
            view.set_row_status(row, &category.status(), category);
            changed += 1;
        }
        tracing::debug!(changed, "marked complete");
        self.recompute_counters(view);
        Ok(changed)
    }

    /// Flip the completion state of a single row, in either direction.
    /// Returns the new completed value.
    pub fn toggle(&mut self, view: &mut impl TaskView, row: usize) -> Result<bool, ActionError> {
        let completed = self.store.toggle(row)?;
        let category = Category::of(completed);
        view.set_row_status(row, &category.status(), category);
        tracing::debug!(row, completed, "toggled");
        self.recompute_counters(view);
        Ok(completed)
    }

    /// Start a delete of the selected rows. Nothing changes until the
    /// returned confirmation is resolved.
    pub fn request_delete(&self, view: &impl TaskView) -> Result<Confirmation, ActionError> {
        let rows = view.selected_rows();
        if rows.is_empty() {
            return Err(ActionError::SelectionRequired {
                action: Action::Delete,
            });
        }
        Ok(Confirmation::DeleteRows { rows })
    }

    /// Start clearing every task. Fails with [`ActionError::NothingToClear`]
    /// when the store is already empty.
    pub fn request_clear(&self) -> Result<Confirmation, ActionError> {
        if self.store.is_empty() {
            return Err(ActionError::NothingToClear);
        }
        Ok(Confirmation::ClearAll)
    }

    /// Finish a confirmed operation. A declined confirmation changes nothing.
    pub fn resolve(
        &mut self,
        confirmation: Confirmation,
        accepted: bool,
        view: &mut impl TaskView,
    ) -> Result<(), ActionError> {
        if !accepted {
            tracing::debug!(?confirmation, "confirmation declined");
            return Ok(());
        }
        match confirmation {
            Confirmation::DeleteRows { rows } => {
                self.store.remove_at(&rows)?;
                view.remove_rows(&rows);
                tracing::debug!(?rows, "tasks deleted");
            }
            Confirmation::ClearAll => {
                self.store.clear();
                view.remove_all_rows();
                tracing::debug!("all tasks cleared");
            }
        }
        self.recompute_counters(view);
        Ok(())
    }

    fn recompute_counters(&self, view: &mut impl TaskView) {
        let summary = self.store.summary();
        tracing::debug!(
            total = summary.total,
            completed = summary.completed,
            pending = summary.pending,
            "counters"
        );
        view.set_summary(summary);
    }
}
