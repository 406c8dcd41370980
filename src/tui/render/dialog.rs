use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::ops::task_ops::NoticeKind;
use crate::tui::app::App;
use crate::util::unicode;

use super::helpers::centered_rect_fixed;

const MIN_POPUP_W: u16 = 30;

/// Render the yes/no popup for the pending confirmation
pub fn render_confirm_dialog(frame: &mut Frame, app: &App, area: Rect) {
    let Some(confirm) = &app.confirm else {
        return;
    };
    let keys = [("y", "yes"), ("n", "no")];
    draw_popup(
        frame,
        app,
        area,
        "Confirm",
        app.theme.highlight,
        confirm.prompt(),
        &keys,
    );
}

/// Render the warning / info popup
pub fn render_notice_dialog(frame: &mut Frame, app: &App, area: Rect) {
    let Some(notice) = &app.notice else {
        return;
    };
    let accent = match notice.kind {
        NoticeKind::Warning => app.theme.pending,
        NoticeKind::Info => app.theme.header,
    };
    draw_popup(
        frame,
        app,
        area,
        notice.title(),
        accent,
        &notice.message,
        &[("Enter", "ok")],
    );
}

fn draw_popup(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    title: &str,
    accent: Color,
    message: &str,
    keys: &[(&str, &str)],
) {
    let bg = app.theme.background;
    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let key_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);

    let mut hint = vec![Span::styled("  ", text_style)];
    for (i, (key, desc)) in keys.iter().enumerate() {
        if i > 0 {
            hint.push(Span::styled("  ", text_style));
        }
        hint.push(Span::styled(key.to_string(), key_style));
        hint.push(Span::styled(format!(" {}", desc), dim_style));
    }

    let lines = vec![
        Line::from(Span::styled("", text_style)),
        Line::from(Span::styled(format!("  {}", message), text_style)),
        Line::from(Span::styled("", text_style)),
        Line::from(hint),
    ];

    // Message plus two columns of margin and the borders
    let popup_w = (unicode::display_width(message) as u16 + 6).max(MIN_POPUP_W);
    let popup_h = lines.len() as u16 + 2;
    let overlay_area = centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            format!(" {} ", title),
            Style::default()
                .fg(accent)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ))
        .border_style(Style::default().fg(accent).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, overlay_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::Mode;
    use crate::tui::input::test_keys::*;
    use crate::tui::render::test_helpers::*;
    use crossterm::event::KeyCode;

    fn render_dialog(app: &App) -> String {
        render_to_string(40, 8, |frame, area| match app.mode {
            Mode::Confirm => render_confirm_dialog(frame, app, area),
            Mode::Notice => render_notice_dialog(frame, app, area),
            Mode::Normal => {}
        })
    }

    #[test]
    fn confirm_dialog_shows_prompt_and_keys() {
        let mut app = app_with_tasks(&["Buy milk"]);
        press(&mut app, KeyCode::Tab);
        press_char(&mut app, 'd');
        assert_eq!(app.mode, Mode::Confirm);

        let output = render_dialog(&app);
        assert!(output.contains(" Confirm "));
        assert!(output.contains("Delete selected task(s)?"));
        assert!(output.contains("y yes  n no"));
    }

    #[test]
    fn notice_dialog_shows_message() {
        let mut app = app_with_tasks(&[]);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, Mode::Notice);

        let output = render_dialog(&app);
        assert!(output.contains(" Warning "));
        assert!(output.contains("Please enter a task!"));
        assert!(output.contains("Enter ok"));
    }

    #[test]
    fn dialog_is_centered_and_bordered() {
        let mut app = app_with_tasks(&[]);
        press(&mut app, KeyCode::Tab);
        press_char(&mut app, 'X');
        let output = render_dialog(&app);
        let lines: Vec<&str> = output.lines().collect();
        // 30 wide popup in a 40 wide area, 6 tall in 8 rows
        assert_eq!(lines[1], "     ┌ Info ──────────────────────┐");
        assert!(lines[3].contains("No tasks to clear!"));
        assert!(lines[6].starts_with("     └"));
    }
}
