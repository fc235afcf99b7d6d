pub mod form_popup;
pub mod help_overlay;
pub mod sort_bar;
pub mod status_row;
pub mod task_list;
pub mod title_bar;

mod helpers;

#[cfg(test)]
pub(crate) mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::{App, Mode};

/// Main render function. Dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    app.refresh_rows();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: title bar (2 rows) | sort bar | task list | status row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // title + separator
            Constraint::Length(1), // sort bar
            Constraint::Min(1),    // task list
            Constraint::Length(1), // status row
        ])
        .split(area);

    title_bar::render_title_bar(frame, app, chunks[0]);
    sort_bar::render_sort_bar(frame, app, chunks[1]);
    task_list::render_task_list(frame, app, chunks[2]);
    status_row::render_status_row(frame, app, chunks[3]);

    // Sort choices drop down over the list
    if app.mode == Mode::SortMenu {
        sort_bar::render_sort_menu(frame, app, chunks[1], area);
    }

    if app.mode == Mode::Form {
        form_popup::render_form_popup(frame, app, area);
    }

    // Help overlay (rendered on top of everything)
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, area);
    }
}
