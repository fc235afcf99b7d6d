use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::model::sort::SortKey;
use crate::tui::app::{App, Mode};

const PREFIX: &str = " Sort by: ";

/// Render the sort bar: the active key and a dropdown marker
pub fn render_sort_bar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let open = app.mode == Mode::SortMenu;
    let key_style = if open {
        Style::default()
            .fg(app.theme.selection_fg)
            .bg(app.theme.selection_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(app.theme.highlight)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    };
    let marker = if open { " \u{25B4}" } else { " \u{25BE}" };

    let line = Line::from(vec![
        Span::styled(PREFIX, Style::default().fg(app.theme.text).bg(bg)),
        Span::styled(app.sort.active().label(), key_style),
        Span::styled(marker, Style::default().fg(app.theme.dim).bg(bg)),
    ]);
    frame.render_widget(
        Paragraph::new(line).style(Style::default().bg(bg)),
        area,
    );
}

/// Render the expanded choice list under the sort bar
pub fn render_sort_menu(frame: &mut Frame, app: &App, bar: Rect, screen: Rect) {
    let bg = app.theme.background;
    let inner_w = SortKey::ALL
        .iter()
        .map(|k| k.label().len())
        .max()
        .unwrap_or(4)
        + 4;
    let width = (inner_w as u16 + 2).min(screen.width.saturating_sub(bar.x));
    let height = (SortKey::ALL.len() as u16 + 2)
        .min(screen.bottom().saturating_sub(bar.bottom()));
    if width == 0 || height == 0 {
        return;
    }
    let menu_area = Rect::new(bar.x + PREFIX.len() as u16 - 1, bar.bottom(), width, height)
        .intersection(screen);
    frame.render_widget(Clear, menu_area);

    let lines: Vec<Line> = SortKey::ALL
        .iter()
        .enumerate()
        .map(|(i, key)| {
            let check = if *key == app.sort.active() { "\u{2713}" } else { " " };
            let text = format!(" {} {:<w$}", check, key.label(), w = inner_w - 3);
            let style = if i == app.sort_menu_cursor {
                Style::default()
                    .fg(app.theme.selection_fg)
                    .bg(app.theme.selection_bg)
            } else {
                Style::default().fg(app.theme.text).bg(bg)
            };
            Line::from(Span::styled(text, style))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.highlight).bg(bg))
        .style(Style::default().bg(bg));
    frame.render_widget(
        Paragraph::new(lines).block(block).style(Style::default().bg(bg)),
        menu_area,
    );
}
