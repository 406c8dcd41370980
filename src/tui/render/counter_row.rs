use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::tui::pane::Focus;
use crate::util::unicode;

use super::helpers::pad_line;

const INPUT_HINTS: &[(&str, &str)] = &[("Enter", "add"), ("Tab", "tasks"), ("Ctrl-C", "quit")];

const LIST_HINTS: &[(&str, &str)] = &[
    ("Enter", "toggle"),
    ("Space", "select"),
    ("c", "complete"),
    ("d", "delete"),
    ("X", "clear all"),
    ("Tab", "input"),
    ("q", "quit"),
];

/// Render the "Total Tasks: N | Completed: C | Pending: P" line
pub fn render_counter_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let text = format!(" {}", app.pane.summary);
    let mut spans = vec![Span::styled(
        unicode::truncate_to_width(&text, area.width as usize),
        Style::default()
            .fg(app.theme.counter)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )];
    pad_line(&mut spans, area.width as usize, bg);
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the key hints for the focused widget. Hints that don't fit are dropped
/// from the right.
pub fn render_key_hints(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let key_style = Style::default().fg(app.theme.text_bright).bg(bg);
    let desc_style = Style::default().fg(app.theme.dim).bg(bg);
    let width = area.width as usize;

    let hints = match app.pane.focus {
        Focus::Input => INPUT_HINTS,
        Focus::List => LIST_HINTS,
    };

    let mut spans = vec![Span::styled(" ", desc_style)];
    let mut used = 1;
    for (i, (key, desc)) in hints.iter().enumerate() {
        let sep = if i == 0 { "" } else { "  " };
        let w = sep.len() + unicode::display_width(key) + 1 + unicode::display_width(desc);
        if used + w > width {
            break;
        }
        spans.push(Span::styled(sep, desc_style));
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::styled(format!(" {}", desc), desc_style));
        used += w;
    }
    pad_line(&mut spans, width, bg);
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
