mod actions;
mod confirm;
mod edit;
mod mouse;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Mode};
use super::pane::Focus;

// Import all submodule functions into this module's namespace
// so that submodules can access cross-module functions via `use super::*;`
#[allow(unused_imports)]
use actions::*;
#[allow(unused_imports)]
use confirm::*;
#[allow(unused_imports)]
use edit::*;
#[allow(unused_imports)]
use navigate::*;

pub use mouse::handle_mouse;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    let key = normalize_key(key);
    // Keys can move or remove rows, so a later click starts a new double-click
    app.last_click = None;

    // Ctrl-C quits from anywhere, dialogs included
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match app.mode {
        Mode::Confirm => handle_confirm(app, key),
        Mode::Notice => handle_notice(app, key),
        Mode::Normal => match app.pane.focus {
            Focus::Input => handle_input_key(app, key),
            Focus::List => handle_list_key(app, key),
        },
    }
}

/// Handle a bracketed paste event. Only the input field accepts text.
pub fn handle_paste(app: &mut App, text: &str) {
    if app.mode != Mode::Normal || app.pane.focus != Focus::Input || text.is_empty() {
        return;
    }
    app.pane.input.insert_str(text);
}

/// Shift+letter arrives as either `Char('x')` + SHIFT or `Char('X')`
/// depending on the terminal; fold both into the uppercase char.
fn normalize_key(mut key: KeyEvent) -> KeyEvent {
    if let KeyCode::Char(c) = key.code
        && key.modifiers.contains(KeyModifiers::SHIFT)
        && c.is_ascii_lowercase()
    {
        key.code = KeyCode::Char(c.to_ascii_uppercase());
    }
    key
}
