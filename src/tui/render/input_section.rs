use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::tui::pane::Focus;
use crate::util::unicode;

use super::helpers::pad_line;

/// Render the "ADD NEW TASK:" label and the input field under it, and record
/// the field's area for mouse clicks
pub fn render_input_section(frame: &mut Frame, app: &mut App, area: Rect) {
    if area.height < 2 || area.width < 3 {
        return;
    }
    let theme = &app.theme;
    let section_bg = theme.input;
    let width = area.width as usize;

    let mut label = vec![Span::styled(
        " ADD NEW TASK:",
        Style::default()
            .fg(theme.button_text)
            .bg(section_bg)
            .add_modifier(Modifier::BOLD),
    )];
    pad_line(&mut label, width, section_bg);

    // One cell of section color on each side of the field
    let field = Rect::new(area.x + 1, area.y + 1, area.width - 2, 1);
    let field_w = field.width as usize;
    let input = &mut app.pane.input;
    input.scroll_to_cursor(field_w);

    let start = unicode::display_col_to_byte_offset(&input.buffer, input.scroll);
    let visible = unicode::fit_to_width(&input.buffer[start..], field_w);
    let field_style = Style::default().fg(theme.button_text).bg(theme.button);
    let edge = Span::styled(" ", Style::default().bg(section_bg));
    let field_line = Line::from(vec![
        edge.clone(),
        Span::styled(visible, field_style),
        edge,
    ]);

    let label_area = Rect::new(area.x, area.y, area.width, 1);
    frame.render_widget(Paragraph::new(Line::from(label)), label_area);
    frame.render_widget(
        Paragraph::new(field_line),
        Rect::new(area.x, area.y + 1, area.width, 1),
    );

    if app.mode == Mode::Normal && app.pane.focus == Focus::Input {
        let col = input.cursor_col().saturating_sub(input.scroll) as u16;
        frame.set_cursor_position(Position::new(field.x + col.min(field.width - 1), field.y));
    }
    app.hit_areas.input = field;
}
