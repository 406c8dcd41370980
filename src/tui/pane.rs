use std::collections::BTreeSet;

use crate::model::store::Summary;
use crate::model::task::Category;
use crate::ops::task_ops::TaskView;
use crate::util::unicode;

/// Which widget receives typed keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    List,
}

/// One rendered table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub status: String,
    pub text: String,
    pub category: Category,
}

/// Single-line text field. `cursor` is a byte offset that always sits on a
/// grapheme boundary.
#[derive(Debug, Clone, Default)]
pub struct InputField {
    pub buffer: String,
    pub cursor: usize,
    /// First visible display column, kept by the renderer
    pub scroll: usize,
}

impl InputField {
    /// Insert one character. Control characters become spaces.
    pub fn insert_char(&mut self, c: char) {
        let c = printable(c);
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Insert pasted text; line breaks, tabs and other control characters
    /// become spaces.
    pub fn insert_str(&mut self, text: &str) {
        let clean: String = text.chars().map(printable).collect();
        self.buffer.insert_str(self.cursor, &clean);
        self.cursor += clean.len();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = unicode::prev_grapheme_boundary(&self.buffer, self.cursor) {
            self.buffer.replace_range(prev..self.cursor, "");
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        if let Some(next) = unicode::next_grapheme_boundary(&self.buffer, self.cursor) {
            self.buffer.replace_range(self.cursor..next, "");
        }
    }

    pub fn delete_word_before(&mut self) {
        let start = unicode::word_start_before(&self.buffer, self.cursor);
        self.buffer.replace_range(start..self.cursor, "");
        self.cursor = start;
    }

    /// Delete from the start of the line to the cursor
    pub fn kill_to_start(&mut self) {
        self.buffer.replace_range(..self.cursor, "");
        self.cursor = 0;
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = unicode::prev_grapheme_boundary(&self.buffer, self.cursor) {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = unicode::next_grapheme_boundary(&self.buffer, self.cursor) {
            self.cursor = next;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.buffer.len();
    }

    /// Place the cursor at a display column (mouse click)
    pub fn move_to_col(&mut self, col: usize) {
        self.cursor = unicode::display_col_to_byte_offset(&self.buffer, col);
    }

    pub fn cursor_col(&self) -> usize {
        unicode::byte_offset_to_display_col(&self.buffer, self.cursor)
    }

    /// Keep the cursor inside a field `width` cells wide
    pub fn scroll_to_cursor(&mut self, width: usize) {
        let col = self.cursor_col();
        if col < self.scroll {
            self.scroll = col;
        } else if width > 0 && col >= self.scroll + width {
            self.scroll = col + 1 - width;
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
        self.scroll = 0;
    }
}

/// Control characters map to a space
fn printable(c: char) -> char {
    if c.is_control() { ' ' } else { c }
}

/// The terminal rendition of the task table, input field and counters.
///
/// Selection follows the Treeview convention of the classic window: rows
/// can be marked explicitly, and when none are marked the cursor row is the
/// selection.
#[derive(Debug, Clone)]
pub struct TaskPane {
    pub rows: Vec<Row>,
    pub cursor: usize,
    /// Explicitly marked rows
    pub marked: BTreeSet<usize>,
    /// First visible row
    pub scroll_offset: usize,
    pub input: InputField,
    pub focus: Focus,
    pub summary: Summary,
}

impl Default for TaskPane {
    fn default() -> Self {
        TaskPane {
            rows: Vec::new(),
            cursor: 0,
            marked: BTreeSet::new(),
            scroll_offset: 0,
            input: InputField::default(),
            focus: Focus::Input,
            summary: Summary::default(),
        }
    }
}

impl TaskPane {
    pub fn move_cursor(&mut self, delta: isize) {
        if self.rows.is_empty() {
            return;
        }
        let max = self.rows.len() - 1;
        self.cursor = self.cursor.saturating_add_signed(delta).min(max);
    }

    pub fn cursor_to_top(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_to_bottom(&mut self) {
        self.cursor = self.rows.len().saturating_sub(1);
    }

    /// Add or remove the cursor row from the explicit selection
    pub fn toggle_mark(&mut self) {
        if self.cursor >= self.rows.len() {
            return;
        }
        if !self.marked.remove(&self.cursor) {
            self.marked.insert(self.cursor);
        }
    }

    pub fn clear_marks(&mut self) {
        self.marked.clear();
    }

    /// Keep the cursor row inside a viewport of `height` rows
    pub fn scroll_to_cursor(&mut self, height: usize) {
        if height == 0 {
            return;
        }
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.cursor >= self.scroll_offset + height {
            self.scroll_offset = self.cursor + 1 - height;
        }
        let max_offset = self.rows.len().saturating_sub(height);
        self.scroll_offset = self.scroll_offset.min(max_offset);
    }

    fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.rows.len().saturating_sub(1));
    }
}

impl TaskView for TaskPane {
    fn append_row(&mut self, status: &str, text: &str, category: Category) {
        self.rows.push(Row {
            status: status.to_string(),
            text: text.to_string(),
            category,
        });
    }

    fn set_row_status(&mut self, row: usize, status: &str, category: Category) {
        if let Some(r) = self.rows.get_mut(row) {
            r.status = status.to_string();
            r.category = category;
        }
    }

    fn remove_rows(&mut self, rows: &BTreeSet<usize>) {
        for &row in rows.iter().rev() {
            if row < self.rows.len() {
                self.rows.remove(row);
            }
        }
        // Surviving marks shift down by the number of removed rows above them
        self.marked = self
            .marked
            .iter()
            .filter(|m| !rows.contains(m))
            .map(|&m| m - rows.range(..m).count())
            .collect();
        // The cursor follows its row, or lands on the row after a removed one
        let above = rows.range(..self.cursor).count();
        self.cursor -= above;
        self.clamp_cursor();
    }

    fn remove_all_rows(&mut self) {
        self.rows.clear();
        self.marked.clear();
        self.cursor = 0;
        self.scroll_offset = 0;
    }

    fn selected_rows(&self) -> BTreeSet<usize> {
        if !self.marked.is_empty() {
            return self.marked.clone();
        }
        if self.cursor < self.rows.len() {
            BTreeSet::from([self.cursor])
        } else {
            BTreeSet::new()
        }
    }

    fn set_summary(&mut self, summary: Summary) {
        self.summary = summary;
    }

    fn clear_input(&mut self) {
        self.input.clear();
    }

    fn focus_input(&mut self) {
        self.focus = Focus::Input;
    }

    fn input_text(&self) -> String {
        self.input.buffer.clone()
    }
}
