use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Span;

use crate::util::unicode;

/// Compute total display width of a slice of spans
pub(super) fn spans_width(spans: &[Span]) -> usize {
    spans
        .iter()
        .map(|s| unicode::display_width(&s.content))
        .sum()
}

/// Push right-aligned `hint` after `spans` if there is room for it in `width`
pub(super) fn push_right_aligned<'a>(
    spans: &mut Vec<Span<'a>>,
    hint: String,
    width: usize,
    pad_style: Style,
    hint_style: Style,
) {
    let content_width = spans_width(spans);
    let hint_width = unicode::display_width(&hint);
    if content_width + hint_width < width {
        let padding = width - content_width - hint_width;
        spans.push(Span::styled(" ".repeat(padding), pad_style));
        spans.push(Span::styled(hint, hint_style));
    }
}

pub(super) fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn right_aligned_hint_fills_width() {
        let mut spans = vec![Span::raw("abc")];
        push_right_aligned(
            &mut spans,
            "xy".into(),
            10,
            Style::default(),
            Style::default(),
        );
        assert_eq!(spans_width(&spans), 10);
    }

    #[test]
    fn right_aligned_hint_dropped_when_no_room() {
        let mut spans = vec![Span::raw("abcdefgh")];
        push_right_aligned(
            &mut spans,
            "xyz".into(),
            10,
            Style::default(),
            Style::default(),
        );
        assert_eq!(spans.len(), 1);
    }

    #[test]
    fn centered_rect_stays_inside_area() {
        let area = Rect::new(0, 0, 20, 10);
        let r = centered_rect_fixed(10, 4, area);
        assert_eq!(r, Rect::new(5, 3, 10, 4));
        let r = centered_rect_fixed(30, 20, area);
        assert_eq!(r, Rect::new(0, 0, 20, 10));
    }
}
