use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::unicode;

use super::helpers::push_right_aligned;

/// Render the title row and the separator line below it
pub fn render_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Length(1), // separator
        ])
        .split(area);

    let bg = app.theme.background;
    let width = area.width as usize;
    let bg_style = Style::default().bg(bg);

    let counts = format!(
        "{} tasks \u{00b7} {} done ",
        app.store.len(),
        app.store.done_count()
    );
    let title_budget = width.saturating_sub(unicode::display_width(&counts) + 4);

    let mut spans = vec![
        Span::styled(" ", bg_style),
        Span::styled(
            "\u{25B6}",
            Style::default().fg(app.theme.purple).bg(bg),
        ),
        Span::styled(" ", bg_style),
        Span::styled(
            unicode::truncate_to_width(&app.title, title_budget),
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    push_right_aligned(
        &mut spans,
        counts,
        width,
        bg_style,
        Style::default().fg(app.theme.dim).bg(bg),
    );
    frame.render_widget(Paragraph::new(Line::from(spans)).style(bg_style), chunks[0]);

    let separator = Line::from(Span::styled(
        "\u{2500}".repeat(width),
        Style::default().fg(app.theme.dim).bg(bg),
    ));
    frame.render_widget(Paragraph::new(separator).style(bg_style), chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn title_and_counts() {
        let mut app = sample_app();
        app.toggle_cursor_task();
        let output = render_to_string(TERM_W, 2, |frame, area| {
            render_title_bar(frame, &app, area);
        });
        let first = output.lines().next().unwrap_or_default();
        assert!(first.starts_with(" \u{25B6} My TODO List"));
        assert!(first.ends_with("3 tasks \u{00b7} 1 done"));
        assert!(output.lines().nth(1).unwrap_or_default().starts_with("\u{2500}\u{2500}"));
    }

    #[test]
    fn custom_title() {
        let mut app = app_with_tasks(&[]);
        app.title = "Groceries".into();
        let output = render_to_string(TERM_W, 2, |frame, area| {
            render_title_bar(frame, &app, area);
        });
        assert!(output.contains("Groceries"));
        assert!(output.contains("0 tasks \u{00b7} 0 done"));
    }
}
