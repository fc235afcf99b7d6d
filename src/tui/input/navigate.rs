use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::App;

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,

        // Cursor
        KeyCode::Char('j') | KeyCode::Down => app.move_cursor(1),
        KeyCode::Char('k') | KeyCode::Up => app.move_cursor(-1),
        KeyCode::Char('g') | KeyCode::Home => app.cursor_to_top(),
        KeyCode::Char('G') | KeyCode::End => app.cursor_to_bottom(),

        // Task actions
        KeyCode::Char(' ') | KeyCode::Char('x') => app.toggle_cursor_task(),
        KeyCode::Char('d') | KeyCode::Delete => app.delete_cursor_task(),
        KeyCode::Char('a') | KeyCode::Char('n') => app.open_form(),

        // Sort
        KeyCode::Char('s') => app.open_sort_menu(),

        _ => {}
    }
}
