use crate::ops::task_ops::{ActionError, Confirmation};
use crate::tui::app::{App, Button, Mode};

/// Add the input field's text as a new task (Enter in the input, or ADD).
pub(super) fn submit_add(app: &mut App) {
    if let Err(e) = app.session.add(&mut app.pane) {
        report(app, e);
    }
}

/// Mark the selected pending rows completed.
pub(super) fn mark_complete(app: &mut App) {
    if let Err(e) = app.session.mark_complete(&mut app.pane) {
        report(app, e);
    }
}

/// Flip the completion state of one row (Enter on a row, or double-click).
pub(super) fn toggle_row(app: &mut App, row: usize) {
    if let Err(e) = app.session.toggle(&mut app.pane, row) {
        report(app, e);
    }
}

/// Ask before deleting the selected rows.
pub(super) fn request_delete(app: &mut App) {
    match app.session.request_delete(&app.pane) {
        Ok(confirmation) => open_confirm(app, confirmation),
        Err(e) => report(app, e),
    }
}

/// Ask before clearing every task.
pub(super) fn request_clear(app: &mut App) {
    match app.session.request_clear() {
        Ok(confirmation) => open_confirm(app, confirmation),
        Err(e) => report(app, e),
    }
}

/// Close the yes/no dialog and finish or drop the pending operation.
pub(super) fn answer_confirm(app: &mut App, accepted: bool) {
    let confirmation = app.confirm.take();
    app.mode = Mode::Normal;
    app.last_click = None;
    if let Some(confirmation) = confirmation {
        if let Err(e) = app.session.resolve(confirmation, accepted, &mut app.pane) {
            report(app, e);
        }
    }
}

pub(super) fn dismiss_notice(app: &mut App) {
    app.notice = None;
    app.mode = Mode::Normal;
}

pub(super) fn press_button(app: &mut App, button: Button) {
    tracing::debug!(?button, "button pressed");
    match button {
        Button::Add => submit_add(app),
        Button::MarkComplete => mark_complete(app),
        Button::Delete => request_delete(app),
        Button::ClearAll => request_clear(app),
    }
}

fn open_confirm(app: &mut App, confirmation: Confirmation) {
    tracing::debug!(prompt = confirmation.prompt(), "asking for confirmation");
    app.confirm = Some(confirmation);
    app.mode = Mode::Confirm;
}

/// Surface an operation error: user mistakes become a dialog, while a
/// store/table disagreement is a bug and fails loudly in debug builds.
fn report(app: &mut App, err: ActionError) {
    match err.notice() {
        Some(notice) => {
            tracing::debug!(%err, "showing notice");
            app.notice = Some(notice);
            app.mode = Mode::Notice;
        }
        None => {
            tracing::error!(%err, "task store and table out of sync");
            if cfg!(debug_assertions) {
                panic!("task store and table out of sync: {err}");
            }
        }
    }
}
