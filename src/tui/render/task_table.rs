use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState};

use crate::tui::app::App;
use crate::tui::pane::Focus;
use crate::util::unicode;

use super::helpers::pad_line;

/// Width of the STATUS column
const STATUS_W: usize = 12;
/// Space for the selection marker before the status
const MARK_W: usize = 3;
/// Gap between the two columns
const GAP: &str = "  ";

/// Render the STATUS / TASK DESCRIPTION table. Row `i` shows task `i`.
pub fn render_task_table(frame: &mut Frame, app: &mut App, area: Rect) {
    if area.height == 0 {
        return;
    }
    let theme = &app.theme;
    let bg = theme.background;
    let width = area.width as usize;

    let body = Rect::new(area.x, area.y + 1, area.width, area.height - 1);
    let visible = body.height as usize;
    let pane = &mut app.pane;
    pane.scroll_to_cursor(visible);
    // The last column holds the scrollbar when rows are hidden
    let overflow = pane.rows.len() > visible;
    let text_w = width.saturating_sub(MARK_W + STATUS_W + GAP.len() + usize::from(overflow));

    let heading_style = Style::default()
        .fg(theme.list_header)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let mut heading = vec![
        Span::styled(" ".repeat(MARK_W), heading_style),
        Span::styled(unicode::fit_to_width("STATUS", STATUS_W), heading_style),
        Span::styled(GAP, heading_style),
        Span::styled(
            unicode::truncate_to_width("TASK DESCRIPTION", text_w),
            heading_style,
        ),
    ];
    pad_line(&mut heading, width, bg);

    let mut lines = vec![Line::from(heading)];
    if pane.rows.is_empty() {
        lines.push(Line::from(Span::styled(
            "   No tasks yet",
            Style::default().fg(theme.dim).bg(bg),
        )));
    }

    let show_cursor = pane.focus == Focus::List;
    for (i, row) in pane
        .rows
        .iter()
        .enumerate()
        .skip(pane.scroll_offset)
        .take(visible)
    {
        let is_cursor = show_cursor && i == pane.cursor;
        let row_bg = if is_cursor { theme.highlight } else { bg };
        let fg = theme.category_color(row.category);
        let mut style = Style::default().fg(fg).bg(row_bg);
        if row.category.is_completed() {
            style = style.add_modifier(Modifier::CROSSED_OUT);
        }
        let status_style = Style::default()
            .fg(fg)
            .bg(row_bg)
            .add_modifier(Modifier::BOLD);

        let mark = if pane.marked.contains(&i) { "*" } else { " " };
        let mut spans = vec![
            Span::styled(
                format!(" {} ", mark),
                Style::default().fg(theme.text_bright).bg(row_bg),
            ),
            Span::styled(unicode::fit_to_width(&row.status, STATUS_W), status_style),
            Span::styled(GAP, Style::default().bg(row_bg)),
            Span::styled(unicode::truncate_to_width(&row.text, text_w), style),
        ];
        pad_line(&mut spans, width, row_bg);
        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);

    if overflow {
        let mut state = ScrollbarState::new(pane.rows.len())
            .viewport_content_length(visible)
            .position(pane.scroll_offset);
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(None)
            .end_symbol(None)
            .track_style(Style::default().fg(theme.dim).bg(bg))
            .thumb_style(Style::default().fg(theme.text_bright).bg(bg));
        frame.render_stateful_widget(scrollbar, body, &mut state);
    }
    app.hit_areas.table_body = body;
}
