use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::App;
use crate::tui::pane::Focus;

use super::*;

/// Keys while the task table has focus
pub(super) fn handle_list_key(app: &mut App, key: KeyEvent) {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return;
    }
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,

        // Focus
        KeyCode::Tab | KeyCode::Char('a') | KeyCode::Char('i') => app.pane.focus = Focus::Input,
        KeyCode::Esc => {
            if app.pane.marked.is_empty() {
                app.pane.focus = Focus::Input;
            } else {
                app.pane.clear_marks();
            }
        }

        // Cursor movement
        KeyCode::Char('j') | KeyCode::Down => app.pane.move_cursor(1),
        KeyCode::Char('k') | KeyCode::Up => app.pane.move_cursor(-1),
        KeyCode::Char('g') | KeyCode::Home => app.pane.cursor_to_top(),
        KeyCode::Char('G') | KeyCode::End => app.pane.cursor_to_bottom(),
        KeyCode::Char(' ') => app.pane.toggle_mark(),

        // Commands
        KeyCode::Enter => {
            if app.pane.cursor < app.pane.rows.len() {
                let row = app.pane.cursor;
                toggle_row(app, row);
            }
        }
        KeyCode::Char('c') => mark_complete(app),
        KeyCode::Char('d') | KeyCode::Delete => request_delete(app),
        KeyCode::Char('X') => request_clear(app),
        _ => {}
    }
}
