mod form;
mod navigate;
mod sort_menu;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Mode};

use form::handle_form;
use navigate::handle_navigate;
use sort_menu::handle_sort_menu;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    app.status_message = None;

    // Ctrl+Q / Ctrl+C quit from anywhere
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c'))
    {
        app.should_quit = true;
        return;
    }

    // Help overlay intercepts all input
    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
            app.show_help = false;
        }
        return;
    }

    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Form => handle_form(app, key),
        Mode::SortMenu => handle_sort_menu(app, key),
    }
}

/// Handle a bracketed paste event (terminal sends pasted text as a single string).
/// Only active while the creation form is open. Newlines become spaces and a
/// paste that would overflow the field is dropped whole.
pub fn handle_paste(app: &mut App, text: &str) {
    if app.mode != Mode::Form || text.is_empty() {
        return;
    }
    let clean = text.replace('\n', " ").replace('\r', "");
    if let Some(input) = app.form.focused_input_mut() {
        input.insert_str(&clean);
    }
}

#[cfg(test)]
pub(crate) mod test_keys {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    pub fn ch(c: char) -> KeyEvent {
        key(KeyCode::Char(c))
    }

    pub fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }
}
