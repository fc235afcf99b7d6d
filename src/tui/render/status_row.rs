use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;

    let line = if let Some(msg) = &app.status_message {
        Line::from(Span::styled(
            format!(" {}", msg),
            Style::default().fg(app.theme.yellow).bg(bg),
        ))
    } else if app.show_key_hints {
        let key_style = Style::default().fg(app.theme.highlight).bg(bg);
        let hint_style = Style::default().fg(app.theme.dim).bg(bg);
        let mut spans = vec![Span::styled(" ", hint_style)];
        for (key, desc) in key_hints(app.mode) {
            spans.push(Span::styled(*key, key_style));
            spans.push(Span::styled(format!(" {}  ", desc), hint_style));
        }
        Line::from(spans)
    } else {
        Line::from("")
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn key_hints(mode: Mode) -> &'static [(&'static str, &'static str)] {
    match mode {
        Mode::Navigate => &[
            ("a", "add"),
            ("space", "done"),
            ("d", "delete"),
            ("s", "sort"),
            ("?", "help"),
            ("q", "quit"),
        ],
        Mode::Form => &[("Enter", "create"), ("Tab", "switch"), ("Esc", "cancel")],
        Mode::SortMenu => &[("\u{2191}\u{2193}", "move"), ("Enter", "select"), ("Esc", "close")],
    }
}
