use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::App;
use crate::tui::pane::Focus;

use super::*;

/// Keys while the input field has focus
pub(super) fn handle_input_key(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let input = &mut app.pane.input;
    match key.code {
        KeyCode::Enter => submit_add(app),
        KeyCode::Tab | KeyCode::Esc | KeyCode::Down => app.pane.focus = Focus::List,
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_home(),
        KeyCode::End => input.move_end(),
        // Complete the selected rows without leaving the input
        KeyCode::Char('k') if ctrl => mark_complete(app),
        // Readline-style line editing
        KeyCode::Char('a') if ctrl => input.move_home(),
        KeyCode::Char('e') if ctrl => input.move_end(),
        KeyCode::Char('u') if ctrl => input.kill_to_start(),
        KeyCode::Char('w') if ctrl => input.delete_word_before(),
        KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
            input.insert_char(c)
        }
        _ => {}
    }
}
