pub mod button_bar;
pub mod counter_row;
pub mod dialog;
mod helpers;
pub mod input_section;
pub mod task_table;
#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::{Block, Paragraph};

use super::app::{App, Mode};

/// Lay out the window sections top to bottom and draw any open dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    let hint_rows = if app.show_key_hints { 1 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),         // title
            Constraint::Length(2),         // input label + field
            Constraint::Length(1),         // buttons
            Constraint::Length(1),         // "YOUR TASKS"
            Constraint::Min(2),            // table heading + rows
            Constraint::Length(1),         // counters
            Constraint::Length(hint_rows), // key hints
        ])
        .split(area);

    let title = helpers::title_bar(
        "To-Do List",
        app.theme.text_bright,
        app.theme.header,
        chunks[0].width,
    );
    frame.render_widget(Paragraph::new(title), chunks[0]);

    input_section::render_input_section(frame, app, chunks[1]);
    button_bar::render_button_bar(frame, app, chunks[2]);

    let list_header = helpers::title_bar(
        "YOUR TASKS",
        app.theme.text_bright,
        app.theme.list_header,
        chunks[3].width,
    );
    frame.render_widget(Paragraph::new(list_header), chunks[3]);

    task_table::render_task_table(frame, app, chunks[4]);
    counter_row::render_counter_row(frame, app, chunks[5]);
    if app.show_key_hints {
        counter_row::render_key_hints(frame, app, chunks[6]);
    }

    match app.mode {
        Mode::Confirm => dialog::render_confirm_dialog(frame, app, area),
        Mode::Notice => dialog::render_notice_dialog(frame, app, area),
        Mode::Normal => {}
    }
}

#[cfg(test)]
mod tests {
    use super::test_helpers::*;
    use crossterm::event::KeyCode;

    use crate::tui::input::test_keys::*;

    #[test]
    fn test_full_screen_layout() {
        let mut app = app_with_tasks(&["Buy milk", "Call bank"]);
        let output = render_app(&mut app);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0].trim(), "To-Do List");
        assert_eq!(lines[1].trim(), "ADD NEW TASK:");
        assert!(lines[3].contains("[ ADD ]"));
        assert!(lines[3].contains("[ CLEAR ALL ]"));
        assert_eq!(lines[4].trim(), "YOUR TASKS");
        assert!(lines[5].contains("STATUS"));
        assert!(lines[5].contains("TASK DESCRIPTION"));
        assert!(lines[6].contains("Buy milk"));
        assert!(lines[7].contains("Call bank"));
        assert!(output.contains("Total Tasks: 2 | Completed: 0 | Pending: 2"));
    }

    #[test]
    fn test_hints_hidden_by_config() {
        let mut app = app_with_tasks(&[]);
        app.show_key_hints = false;
        let output = render_app(&mut app);
        assert!(!output.contains("Ctrl-C quit"));
        assert!(output.lines().last().unwrap().contains("Total Tasks: 0"));
    }

    #[test]
    fn test_dialog_drawn_over_table() {
        let mut app = app_with_tasks(&["Buy milk"]);
        press(&mut app, KeyCode::Tab);
        press_char(&mut app, 'X');
        let output = render_app(&mut app);
        assert!(output.contains("Confirm"));
        assert!(output.contains("Clear ALL tasks?"));
    }

    #[test]
    fn test_render_records_hit_areas() {
        let mut app = app_with_tasks(&["Buy milk"]);
        render_app(&mut app);
        assert_eq!(app.hit_areas.buttons.len(), 4);
        assert_eq!(app.hit_areas.input.y, 2);
        // Rows start under the table heading
        assert_eq!(app.hit_areas.table_body.y, 6);
    }
}
