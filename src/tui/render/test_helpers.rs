use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::model::config::AppConfig;
use crate::model::sort::SortKey;
use crate::ops::seed::initial_store;
use crate::ops::store::TaskStore;
use crate::tui::app::App;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// App as `td` starts by default: the three sample tasks, sorted by name.
pub fn sample_app() -> App {
    let config = AppConfig::default();
    let store = initial_store(&config.seed, false);
    App::new(store, &config, SortKey::Name)
}

/// App holding exactly the given `(name, description, done)` tasks.
pub fn app_with_tasks(tasks: &[(&str, Option<&str>, bool)]) -> App {
    let mut store = TaskStore::new();
    for (name, description, done) in tasks {
        let task = store.add(name, *description).unwrap();
        if *done {
            store.set_done(task.id, true);
        }
    }
    App::new(store, &AppConfig::default(), SortKey::Name)
}
