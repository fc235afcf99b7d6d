use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::ops::form::{FormField, TextInput};
use crate::tui::app::App;
use crate::tui::theme::Theme;
use crate::util::unicode;

use super::helpers::{centered_rect_fixed, push_right_aligned};

/// Render the creation form popup centered over the list
pub fn render_form_popup(frame: &mut Frame, app: &App, area: Rect) {
    let popup_w: u16 = 60.min(area.width.saturating_sub(2));
    let inner_w = popup_w.saturating_sub(2) as usize;
    let theme = &app.theme;
    let bg = theme.background;
    let focus = app.form.focus();

    let mut lines: Vec<Line> = Vec::new();
    for (field, label, input, placeholder) in [
        (FormField::Name, "Name", app.form.name(), "required"),
        (
            FormField::Description,
            "Description",
            app.form.description(),
            "optional",
        ),
    ] {
        let focused = focus == Some(field);
        lines.push(label_line(theme, label, input, focused, inner_w));
        let mut spans = vec![Span::styled(
            if focused { " \u{203A} " } else { "   " },
            Style::default().fg(theme.highlight).bg(bg),
        )];
        spans.extend(input_spans(
            theme,
            input,
            placeholder,
            focused,
            inner_w.saturating_sub(4),
        ));
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let key_style = Style::default().fg(theme.highlight).bg(bg);
    let hint_style = Style::default().fg(theme.dim).bg(bg);
    lines.push(Line::from(vec![
        Span::styled(" Enter", key_style),
        Span::styled(" create  ", hint_style),
        Span::styled("Tab", key_style),
        Span::styled(" switch  ", hint_style),
        Span::styled("Esc", key_style),
        Span::styled(" cancel", hint_style),
    ]));

    let popup_h = ((lines.len() as u16) + 2).min(area.height.saturating_sub(2));
    let overlay_area = centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.highlight).bg(bg))
        .title(Span::styled(
            " Create Task ",
            Style::default()
                .fg(theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, overlay_area);
}

/// Field label with its live counter on the right
fn label_line<'a>(
    theme: &Theme,
    label: &'a str,
    input: &TextInput,
    focused: bool,
    width: usize,
) -> Line<'a> {
    let bg = theme.background;
    let label_style = if focused {
        Style::default()
            .fg(theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text).bg(bg)
    };
    let counter_color = if input.len() == input.max_len() {
        theme.yellow
    } else {
        theme.dim
    };
    let mut spans = vec![Span::styled(" ", Style::default().bg(bg)), Span::styled(label, label_style)];
    push_right_aligned(
        &mut spans,
        format!("{} ", input.counter()),
        width,
        Style::default().bg(bg),
        Style::default().fg(counter_color).bg(bg),
    );
    Line::from(spans)
}

/// Single-line view of an input. When focused the window scrolls so the
/// cursor cell stays visible.
fn input_spans(
    theme: &Theme,
    input: &TextInput,
    placeholder: &'static str,
    focused: bool,
    width: usize,
) -> Vec<Span<'static>> {
    let bg = theme.background;
    let text_style = Style::default().fg(theme.text_bright).bg(bg);
    let cursor_style = Style::default().fg(theme.background).bg(theme.text_bright);
    let text = input.text();

    if !focused {
        if text.is_empty() {
            return vec![Span::styled(placeholder, Style::default().fg(theme.dim).bg(bg))];
        }
        return vec![Span::styled(unicode::truncate_to_width(text, width), text_style)];
    }
    if width == 0 {
        return Vec::new();
    }

    let cursor = input.cursor().min(text.len());
    let start = if unicode::byte_offset_to_display_col(text, cursor) + 1 > width {
        unicode::tail_start_for_width(&text[..cursor], width - 1)
    } else {
        0
    };

    let before = &text[start..cursor];
    let mut spans = Vec::new();
    if !before.is_empty() {
        spans.push(Span::styled(before.to_string(), text_style));
    }
    match unicode::next_grapheme_boundary(text, cursor) {
        Some(end) => {
            spans.push(Span::styled(text[cursor..end].to_string(), cursor_style));
            let used = unicode::display_width(before) + unicode::display_width(&text[cursor..end]);
            let after = &text[end..];
            if !after.is_empty() && used < width {
                spans.push(Span::styled(
                    unicode::truncate_to_width(after, width - used),
                    text_style,
                ));
            }
        }
        None => spans.push(Span::styled(" ", cursor_style)),
    }
    spans
}
