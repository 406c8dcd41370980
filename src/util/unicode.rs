use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width in terminal cells.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate a string to fit within `max_cells` terminal cells, appending `…` if truncated.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 0 {
        return String::new();
    }
    // One cell is reserved for the ellipsis
    let budget = max_cells - 1;
    let mut width = 0;
    let mut result = String::new();
    for g in s.graphemes(true) {
        let gw = display_width(g);
        if width + gw > budget {
            break;
        }
        width += gw;
        result.push_str(g);
    }
    result.push('\u{2026}');
    result
}

/// Pad `s` with spaces to exactly `cells` wide, truncating if it is wider.
pub fn fit_to_width(s: &str, cells: usize) -> String {
    let mut out = truncate_to_width(s, cells);
    let w = display_width(&out);
    if w < cells {
        out.push_str(&" ".repeat(cells - w));
    }
    out
}

/// Byte offset of the grapheme after the one starting at `byte_offset`.
/// None at the end of the string.
pub fn next_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset >= s.len() {
        return None;
    }
    let step = s[byte_offset..]
        .graphemes(true)
        .next()
        .map_or(0, str::len);
    Some(byte_offset + step)
}

/// Byte offset of the grapheme ending at `byte_offset`. None at the start.
pub fn prev_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset == 0 {
        return None;
    }
    s[..byte_offset]
        .grapheme_indices(true)
        .next_back()
        .map(|(i, _)| i)
}

/// Start of the whitespace-delimited word left of `byte_offset`.
pub fn word_start_before(s: &str, byte_offset: usize) -> usize {
    let prefix = &s[..byte_offset.min(s.len())];
    let trimmed = prefix.trim_end();
    trimmed
        .grapheme_indices(true)
        .rev()
        .find(|(_, g)| g.chars().all(char::is_whitespace))
        .map_or(0, |(i, g)| i + g.len())
}

/// Terminal column of a byte offset.
pub fn byte_offset_to_display_col(s: &str, byte_offset: usize) -> usize {
    display_width(&s[..byte_offset.min(s.len())])
}

/// Byte offset for a terminal column, snapped to the start of the grapheme
/// covering that column. Columns past the end map to `s.len()`.
pub fn display_col_to_byte_offset(s: &str, col: usize) -> usize {
    let mut width = 0;
    for (i, g) in s.grapheme_indices(true) {
        let gw = display_width(g);
        if width + gw > col {
            return i;
        }
        width += gw;
    }
    s.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_width() {
        assert_eq!(display_width("Buy milk"), 8);
        assert_eq!(display_width("牛乳"), 4);
        assert_eq!(display_width("cafe\u{0301}"), 4);
        assert_eq!(display_width(""), 0);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate_to_width("Call bank", 20), "Call bank");
        assert_eq!(truncate_to_width("Call bank", 9), "Call bank");
        assert_eq!(truncate_to_width("Call the bank today", 8), "Call th\u{2026}");
        assert_eq!(truncate_to_width("牛乳を買う", 5), "牛乳\u{2026}");
        assert_eq!(truncate_to_width("abc", 1), "\u{2026}");
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    fn test_fit_to_width() {
        assert_eq!(fit_to_width("ab", 4), "ab  ");
        assert_eq!(fit_to_width("abcdef", 4), "abc\u{2026}");
        // A wide char that doesn't fit leaves a gap that is padded
        assert_eq!(display_width(&fit_to_width("牛乳牛", 4)), 4);
    }

    #[test]
    fn test_grapheme_boundaries() {
        let s = "a牛e\u{0301}";
        assert_eq!(next_grapheme_boundary(s, 0), Some(1));
        assert_eq!(next_grapheme_boundary(s, 1), Some(4));
        assert_eq!(next_grapheme_boundary(s, 4), Some(s.len()));
        assert_eq!(next_grapheme_boundary(s, s.len()), None);

        assert_eq!(prev_grapheme_boundary(s, s.len()), Some(4));
        assert_eq!(prev_grapheme_boundary(s, 4), Some(1));
        assert_eq!(prev_grapheme_boundary(s, 1), Some(0));
        assert_eq!(prev_grapheme_boundary(s, 0), None);
    }

    #[test]
    fn test_word_start_before() {
        let s = "buy some milk";
        assert_eq!(word_start_before(s, s.len()), 9);
        assert_eq!(word_start_before(s, 9), 4);
        assert_eq!(word_start_before(s, 3), 0);
        assert_eq!(word_start_before("milk  ", 6), 0);
        assert_eq!(word_start_before("", 0), 0);
    }

    #[test]
    fn test_col_conversions() {
        assert_eq!(byte_offset_to_display_col("牛乳", 3), 2);
        assert_eq!(display_col_to_byte_offset("牛乳", 2), 3);
        // Column inside a wide char snaps to its start
        assert_eq!(display_col_to_byte_offset("牛乳", 1), 0);
        assert_eq!(display_col_to_byte_offset("hi", 10), 2);
    }
}
