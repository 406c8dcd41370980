use std::time::Instant;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use crate::tui::app::{App, Button, DOUBLE_CLICK, Mode};
use crate::tui::pane::Focus;

use super::*;

/// Handle a mouse event against the regions recorded by the last draw
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    handle_mouse_at(app, mouse, Instant::now());
}

pub(super) fn handle_mouse_at(app: &mut App, mouse: MouseEvent, now: Instant) {
    // Dialogs are modal; clicks behind them do nothing
    if app.mode != Mode::Normal {
        return;
    }
    let pos = Position::new(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => click(app, pos, now),
        MouseEventKind::ScrollDown if app.hit_areas.table_body.contains(pos) => {
            app.pane.move_cursor(1)
        }
        MouseEventKind::ScrollUp if app.hit_areas.table_body.contains(pos) => {
            app.pane.move_cursor(-1)
        }
        _ => {}
    }
}

fn click(app: &mut App, pos: Position, now: Instant) {
    if let Some(button) = button_at(app, pos) {
        app.last_click = None;
        press_button(app, button);
        return;
    }

    let input_area = app.hit_areas.input;
    if input_area.contains(pos) {
        app.last_click = None;
        app.pane.focus = Focus::Input;
        let col = app.pane.input.scroll + (pos.x - input_area.x) as usize;
        app.pane.input.move_to_col(col);
        return;
    }

    let body = app.hit_areas.table_body;
    if body.contains(pos) {
        let row = app.pane.scroll_offset + (pos.y - body.y) as usize;
        if row >= app.pane.rows.len() {
            return;
        }
        app.pane.focus = Focus::List;
        app.pane.cursor = row;

        let is_double = app
            .last_click
            .is_some_and(|(last_row, at)| last_row == row && now.duration_since(at) <= DOUBLE_CLICK);
        if is_double {
            app.last_click = None;
            toggle_row(app, row);
        } else {
            app.last_click = Some((row, now));
        }
    }
}

fn button_at(app: &App, pos: Position) -> Option<Button> {
    app.hit_areas
        .buttons
        .iter()
        .find(|(_, area)| area.contains(pos))
        .map(|(button, _)| *button)
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
    use pretty_assertions::assert_eq;
    use ratatui::layout::Rect;

    use super::handle_mouse_at;
    use crate::model::Config;
    use crate::tui::app::{App, Button, Mode};
    use crate::tui::input::test_keys::*;
    use crate::tui::pane::Focus;

    fn left_click(col: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: col,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    /// App with tasks and hand-placed hit areas: table rows start at y=10,
    /// buttons on y=5, input on y=3.
    fn app_with(tasks: &[&str]) -> App {
        let mut app = App::new(&Config::default());
        for task in tasks {
            add_task(&mut app, task);
        }
        app.hit_areas.input = Rect::new(2, 3, 40, 1);
        app.hit_areas.table_body = Rect::new(1, 10, 60, 8);
        app.hit_areas.buttons = vec![
            (Button::Add, Rect::new(1, 5, 7, 1)),
            (Button::MarkComplete, Rect::new(9, 5, 17, 1)),
            (Button::Delete, Rect::new(27, 5, 15, 1)),
            (Button::ClearAll, Rect::new(43, 5, 13, 1)),
        ];
        app
    }

    #[test]
    fn test_single_click_moves_cursor() {
        let mut app = app_with(&["A", "B", "C"]);
        let now = Instant::now();
        handle_mouse_at(&mut app, left_click(5, 12), now);
        assert_eq!(app.pane.cursor, 2);
        assert_eq!(app.pane.focus, Focus::List);
        assert!(app.session.store().tasks().iter().all(|t| !t.completed));
    }

    #[test]
    fn test_double_click_toggles_row() {
        let mut app = app_with(&["A", "B"]);
        let now = Instant::now();
        handle_mouse_at(&mut app, left_click(5, 11), now);
        handle_mouse_at(&mut app, left_click(5, 11), now + Duration::from_millis(150));
        assert!(app.session.store().tasks()[1].completed);

        // A second double-click flips it back
        let later = now + Duration::from_secs(2);
        handle_mouse_at(&mut app, left_click(5, 11), later);
        handle_mouse_at(&mut app, left_click(5, 11), later + Duration::from_millis(100));
        assert!(!app.session.store().tasks()[1].completed);
    }

    #[test]
    fn test_slow_or_split_clicks_do_not_toggle() {
        let mut app = app_with(&["A", "B"]);
        let now = Instant::now();
        handle_mouse_at(&mut app, left_click(5, 10), now);
        handle_mouse_at(&mut app, left_click(5, 10), now + Duration::from_secs(1));
        handle_mouse_at(&mut app, left_click(5, 11), now + Duration::from_millis(1100));
        assert!(app.session.store().tasks().iter().all(|t| !t.completed));
    }

    #[test]
    fn test_click_below_last_row_is_ignored() {
        let mut app = app_with(&["A"]);
        handle_mouse_at(&mut app, left_click(5, 15), Instant::now());
        assert_eq!(app.pane.cursor, 0);
        assert_eq!(app.pane.focus, Focus::Input);
    }

    #[test]
    fn test_add_button() {
        let mut app = app_with(&[]);
        type_text(&mut app, "Buy milk");
        handle_mouse_at(&mut app, left_click(3, 5), Instant::now());
        assert_eq!(app.session.store().size(), 1);
        assert_eq!(app.pane.input.buffer, "");
    }

    #[test]
    fn test_delete_button_asks_first() {
        let mut app = app_with(&["A", "B"]);
        handle_mouse_at(&mut app, left_click(30, 5), Instant::now());
        assert_eq!(app.mode, Mode::Confirm);
        assert_eq!(app.session.store().size(), 2);

        // Clicks are ignored while the dialog is open
        handle_mouse_at(&mut app, left_click(45, 5), Instant::now());
        assert_eq!(app.mode, Mode::Confirm);
        press_char(&mut app, 'n');
        assert_eq!(app.session.store().size(), 2);
    }

    #[test]
    fn test_mark_complete_button_uses_cursor_row() {
        let mut app = app_with(&["A", "B"]);
        handle_mouse_at(&mut app, left_click(5, 11), Instant::now());
        handle_mouse_at(&mut app, left_click(12, 5), Instant::now());
        let completed: Vec<bool> = app.session.store().tasks().iter().map(|t| t.completed).collect();
        assert_eq!(completed, vec![false, true]);
    }

    #[test]
    fn test_click_in_input_places_cursor() {
        let mut app = app_with(&["A"]);
        type_text(&mut app, "hello");
        app.pane.focus = Focus::List;
        handle_mouse_at(&mut app, left_click(4, 3), Instant::now());
        assert_eq!(app.pane.focus, Focus::Input);
        assert_eq!(app.pane.input.cursor, 2);
    }

    #[test]
    fn test_click_after_delete_is_not_a_double_click() {
        let mut app = app_with(&["A", "B", "C"]);
        let now = Instant::now();
        handle_mouse_at(&mut app, left_click(5, 11), now);
        press_char(&mut app, 'd');
        press_char(&mut app, 'y');
        // Row 1 now shows "C"; one click must only move the cursor there
        handle_mouse_at(&mut app, left_click(5, 11), now + Duration::from_millis(200));

        let tasks: Vec<(&str, bool)> = app
            .session
            .store()
            .tasks()
            .iter()
            .map(|t| (t.text(), t.completed))
            .collect();
        assert_eq!(tasks, vec![("A", false), ("C", false)]);
        assert_eq!(app.pane.cursor, 1);
    }

    #[test]
    fn test_key_press_between_clicks_breaks_double_click() {
        let mut app = app_with(&["A", "B"]);
        let now = Instant::now();
        handle_mouse_at(&mut app, left_click(5, 10), now);
        press_char(&mut app, 'j');
        handle_mouse_at(&mut app, left_click(5, 10), now + Duration::from_millis(100));
        assert!(app.session.store().tasks().iter().all(|t| !t.completed));
    }
}
