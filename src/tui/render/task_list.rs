use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::view::TaskRow;
use crate::tui::app::App;
use crate::tui::theme::Theme;
use crate::util::unicode;

use super::helpers::spans_width;

/// Columns before a task name: " [ ] "
const NAME_INDENT: usize = 5;

fn checkbox(done: bool) -> &'static str {
    if done { "[x]" } else { "[ ]" }
}

/// Render the sorted task rows, keeping the cursor row in view
pub fn render_task_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    if app.rows().is_empty() {
        let empty = Paragraph::new(" No tasks. Press a to add one.")
            .style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    let width = area.width as usize;
    let visible_height = area.height as usize;
    let cursor = app.cursor;

    let blocks: Vec<Vec<Line<'static>>> = app
        .rows()
        .iter()
        .enumerate()
        .map(|(i, row)| task_block(&app.theme, row, i == cursor, width))
        .collect();

    app.scroll_offset = scroll_for_cursor(
        &blocks.iter().map(Vec::len).collect::<Vec<_>>(),
        cursor,
        app.scroll_offset,
        visible_height,
    );

    let lines: Vec<Line<'static>> = blocks
        .into_iter()
        .skip(app.scroll_offset)
        .flatten()
        .take(visible_height)
        .collect();

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// First visible row such that the whole cursor block fits below it.
fn scroll_for_cursor(heights: &[usize], cursor: usize, scroll: usize, visible: usize) -> usize {
    let mut scroll = scroll.min(cursor);
    while scroll < cursor && heights[scroll..=cursor].iter().sum::<usize>() > visible {
        scroll += 1;
    }
    scroll
}

/// Lines for one task: name line, wrapped description, blank spacer.
fn task_block(theme: &Theme, row: &TaskRow, is_cursor: bool, width: usize) -> Vec<Line<'static>> {
    let bg = if is_cursor {
        theme.selection_bg
    } else {
        theme.background
    };
    let bg_style = Style::default().bg(bg);

    let name_budget = width.saturating_sub(NAME_INDENT + 1);
    let mut spans = vec![
        Span::styled(" ", bg_style),
        Span::styled(
            checkbox(row.done),
            Style::default().fg(theme.check_color(row.done)).bg(bg),
        ),
        Span::styled(" ", bg_style),
        Span::styled(
            unicode::truncate_to_width(&row.name, name_budget),
            theme.name_style(row.done, bg),
        ),
    ];
    if is_cursor {
        let used = spans_width(&spans);
        if used < width {
            spans.push(Span::styled(" ".repeat(width - used), bg_style));
        }
    }

    let mut lines = vec![Line::from(spans)];

    if let Some(desc) = &row.description {
        let desc_style = Style::default().fg(theme.text).bg(theme.background);
        let indent = " ".repeat(NAME_INDENT);
        for part in unicode::wrap_to_width(desc, width.saturating_sub(NAME_INDENT + 1)) {
            lines.push(Line::from(vec![
                Span::styled(indent.clone(), Style::default().bg(theme.background)),
                Span::styled(part, desc_style),
            ]));
        }
    }

    lines.push(Line::from(""));
    lines
}
