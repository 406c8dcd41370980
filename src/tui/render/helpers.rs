use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::util::unicode;

/// A full-width colored bar with centered bold text
pub(super) fn title_bar(text: &str, fg: Color, bg: Color, width: u16) -> Line<'static> {
    let width = width as usize;
    let text_w = unicode::display_width(text).min(width);
    let left = (width - text_w) / 2;
    let right = width - text_w - left;
    let style = Style::default().fg(fg).bg(bg);
    Line::from(vec![
        Span::styled(" ".repeat(left), style),
        Span::styled(
            unicode::truncate_to_width(text, width),
            style.add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ".repeat(right), style),
    ])
}

/// Pad a line with `bg` spaces out to `width` cells
pub(super) fn pad_line(spans: &mut Vec<Span<'static>>, width: usize, bg: Color) {
    let used = spans_width(spans);
    if used < width {
        spans.push(Span::styled(" ".repeat(width - used), Style::default().bg(bg)));
    }
}

/// Compute total display width of a slice of spans
pub(super) fn spans_width(spans: &[Span]) -> usize {
    spans
        .iter()
        .map(|s| unicode::display_width(&s.content))
        .sum()
}

/// A `width` x `height` rect centered in `area`, clipped to it
pub(super) fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}
