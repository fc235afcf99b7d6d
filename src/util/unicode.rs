use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width in terminal cells. Tabs count as 4 cells.
pub fn display_width(s: &str) -> usize {
    s.graphemes(true).map(grapheme_display_width).sum()
}

/// Truncate a string to fit within `max_cells` terminal cells, appending `…` if truncated.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if max_cells == 0 {
        return String::new();
    }
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 1 {
        return "\u{2026}".to_string();
    }
    let budget = max_cells - 1;
    let mut width = 0;
    let mut result = String::new();
    for grapheme in s.graphemes(true) {
        let gw = grapheme_display_width(grapheme);
        if width + gw > budget {
            break;
        }
        width += gw;
        result.push_str(grapheme);
    }
    result.push('\u{2026}');
    result
}

/// Keep the last graphemes of `s` that fit in `max_cells`, for scrolling a
/// single-line input so its end stays visible. Returns the byte offset where
/// the kept tail starts.
pub fn tail_start_for_width(s: &str, max_cells: usize) -> usize {
    let mut width = 0;
    let mut start = s.len();
    for (i, g) in s.grapheme_indices(true).rev() {
        let gw = grapheme_display_width(g);
        if width + gw > max_cells {
            break;
        }
        width += gw;
        start = i;
    }
    start
}

/// Next grapheme boundary after `byte_offset`. Returns None if at end.
pub fn next_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset >= s.len() {
        return None;
    }
    let step = s[byte_offset..]
        .graphemes(true)
        .next()
        .map_or(s.len() - byte_offset, str::len);
    Some(byte_offset + step)
}

/// Previous grapheme boundary before `byte_offset`. Returns None if at start.
pub fn prev_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset == 0 {
        return None;
    }
    s[..byte_offset]
        .grapheme_indices(true)
        .next_back()
        .map(|(i, _)| i)
}

/// Convert byte offset to display column (terminal cells).
pub fn byte_offset_to_display_col(s: &str, byte_offset: usize) -> usize {
    display_width(&s[..byte_offset.min(s.len())])
}

/// Word-wrap `text` to lines of at most `max_cells` display cells.
/// Words wider than a line are split at grapheme boundaries.
pub fn wrap_to_width(text: &str, max_cells: usize) -> Vec<String> {
    if max_cells == 0 {
        return Vec::new();
    }
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_w = 0;

    for word in text.split_whitespace() {
        let word_w = display_width(word);
        let space = usize::from(current_w > 0);
        if current_w + space + word_w <= max_cells {
            if space == 1 {
                current.push(' ');
            }
            current.push_str(word);
            current_w += space + word_w;
            continue;
        }
        if current_w > 0 {
            lines.push(std::mem::take(&mut current));
            current_w = 0;
        }
        if word_w <= max_cells {
            current.push_str(word);
            current_w = word_w;
            continue;
        }
        // Hard-split an over-long word
        for g in word.graphemes(true) {
            let gw = grapheme_display_width(g);
            if current_w + gw > max_cells && current_w > 0 {
                lines.push(std::mem::take(&mut current));
                current_w = 0;
            }
            current.push_str(g);
            current_w += gw;
        }
    }
    if current_w > 0 {
        lines.push(current);
    }
    lines
}

/// Display width of a grapheme cluster.
fn grapheme_display_width(g: &str) -> usize {
    if g == "\t" {
        return 4;
    }
    UnicodeWidthStr::width(g)
}
