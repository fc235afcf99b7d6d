use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::App;

pub(super) fn handle_form(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.cancel_form(),
        KeyCode::Enter => app.confirm_form(),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            app.form.toggle_focus()
        }
        _ => {
            let Some(input) = app.form.focused_input_mut() else {
                return;
            };
            match key.code {
                KeyCode::Char(c)
                    if !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                {
                    input.insert_char(c);
                }
                KeyCode::Backspace => {
                    input.backspace();
                }
                KeyCode::Delete => {
                    input.delete();
                }
                KeyCode::Left => input.move_left(),
                KeyCode::Right => input.move_right(),
                KeyCode::Home => input.move_home(),
                KeyCode::End => input.move_end(),
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::ops::form::FormField;
    use crate::tui::app::Mode;
    use crate::tui::input::handle_key;
    use crate::tui::input::test_keys::*;
    use crate::tui::render::test_helpers::*;

    use super::*;

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            handle_key(app, ch(c));
        }
    }

    #[test]
    fn typing_fills_focused_field() {
        let mut app = app_with_tasks(&[]);
        handle_key(&mut app, ch('a'));
        type_str(&mut app, "Buy milk");
        handle_key(&mut app, key(KeyCode::Tab));
        assert_eq!(app.form.focus(), Some(FormField::Description));
        type_str(&mut app, "2 litres");

        assert_eq!(app.form.name().text(), "Buy milk");
        assert_eq!(app.form.description().text(), "2 litres");
    }

    #[test]
    fn form_keys_do_not_trigger_navigate_actions() {
        let mut app = sample_app();
        app.open_form();
        type_str(&mut app, "dsq");
        assert_eq!(app.mode, Mode::Form);
        assert_eq!(app.store.len(), 3);
        assert!(!app.should_quit);
        assert_eq!(app.form.name().text(), "dsq");
    }

    #[test]
    fn enter_creates_task() {
        let mut app = app_with_tasks(&[]);
        app.open_form();
        type_str(&mut app, "Call mom");
        handle_key(&mut app, key(KeyCode::Enter));

        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.rows().len(), 1);
        assert_eq!(app.rows()[0].name, "Call mom");
        assert_eq!(app.rows()[0].description, None);
    }

    #[test]
    fn enter_with_empty_name_keeps_form() {
        let mut app = app_with_tasks(&[]);
        app.open_form();
        handle_key(&mut app, key(KeyCode::Tab));
        type_str(&mut app, "desc only");
        handle_key(&mut app, key(KeyCode::Enter));

        assert_eq!(app.mode, Mode::Form);
        assert_eq!(app.form.description().text(), "desc only");
        assert!(app.rows().is_empty());
    }

    #[test]
    fn esc_cancels() {
        let mut app = app_with_tasks(&[]);
        app.open_form();
        type_str(&mut app, "temp");
        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.rows().is_empty());
        assert!(app.form.name().is_empty());
    }

    #[test]
    fn name_stops_at_forty_chars() {
        let mut app = app_with_tasks(&[]);
        app.open_form();
        type_str(&mut app, &"a".repeat(45));
        assert_eq!(app.form.name().len(), 40);
    }

    #[test]
    fn backspace_and_cursor_keys_edit() {
        let mut app = app_with_tasks(&[]);
        app.open_form();
        type_str(&mut app, "milk");
        handle_key(&mut app, key(KeyCode::Home));
        type_str(&mut app, "Buy ");
        handle_key(&mut app, key(KeyCode::End));
        handle_key(&mut app, key(KeyCode::Backspace));
        assert_eq!(app.form.name().text(), "Buy mil");
        handle_key(&mut app, key(KeyCode::Left));
        handle_key(&mut app, key(KeyCode::Delete));
        assert_eq!(app.form.name().text(), "Buy mi");
    }
}
