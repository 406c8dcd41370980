use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::App;

use super::*;

pub(super) fn handle_confirm(app: &mut App, key: KeyEvent) {
    match key.code {
        // Enter answers yes, like the default button of a yes/no box
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => answer_confirm(app, true),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => answer_confirm(app, false),
        _ => {}
    }
}

pub(super) fn handle_notice(app: &mut App, key: KeyEvent) {
    if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
        dismiss_notice(app);
    }
}
