use crossterm::event::{KeyCode, KeyEvent};

use crate::model::sort::SortKey;
use crate::tui::app::App;

pub(super) fn handle_sort_menu(app: &mut App, key: KeyEvent) {
    let last = SortKey::ALL.len() - 1;
    match key.code {
        KeyCode::Esc | KeyCode::Char('s') => app.close_sort_menu(),
        KeyCode::Char('j') | KeyCode::Down => {
            app.sort_menu_cursor = (app.sort_menu_cursor + 1).min(last);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.sort_menu_cursor = app.sort_menu_cursor.saturating_sub(1);
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            if let Some(&choice) = SortKey::ALL.get(app.sort_menu_cursor) {
                app.select_sort(choice);
            }
        }
        KeyCode::Char('n') => app.select_sort(SortKey::Name),
        KeyCode::Char('d') => app.select_sort(SortKey::Done),
        _ => {}
    }
}
