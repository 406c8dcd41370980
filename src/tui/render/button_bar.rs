use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Button};
use crate::util::unicode;

const GAP: u16 = 2;

/// Render the command buttons and record where each one landed.
/// Buttons that don't fit the width are left out.
pub fn render_button_bar(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let button_style = Style::default()
        .fg(app.theme.button_text)
        .bg(app.theme.button)
        .add_modifier(Modifier::BOLD);

    let mut spans = vec![Span::styled(" ", Style::default().bg(bg))];
    let mut x = area.x + 1;
    let right = area.x + area.width;
    app.hit_areas.buttons.clear();

    for button in Button::ALL {
        let text = format!("[ {} ]", button.label());
        let w = unicode::display_width(&text) as u16;
        if x + w > right {
            break;
        }
        if x > area.x + 1 {
            spans.push(Span::styled(" ".repeat(GAP as usize), Style::default().bg(bg)));
        }
        spans.push(Span::styled(text, button_style));
        app.hit_areas.buttons.push((button, Rect::new(x, area.y, w, 1)));
        x += w + GAP;
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        area,
    );
}
