use std::cell::Cell;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use crossterm::event::{
    self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::cli::handlers::Startup;
use crate::io::config_io;
use crate::io::watcher::{ConfigEvent, ConfigWatcher};
use crate::model::config::AppConfig;
use crate::model::sort::SortKey;
use crate::model::task::TaskId;
use crate::ops::form::{CreationForm, FormError};
use crate::ops::seed::initial_store;
use crate::ops::sort::SortSelector;
use crate::ops::store::TaskStore;
use crate::ops::view::{TaskRow, build_rows, row_index};

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Moving through the list
    Navigate,
    /// Creation form popup has input
    Form,
    /// Sort choice list is expanded
    SortMenu,
}

/// Main application state
pub struct App {
    pub store: TaskStore,
    pub sort: SortSelector,
    pub form: CreationForm,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    /// Title shown in the top bar
    pub title: String,
    pub show_key_hints: bool,
    /// Help overlay visible
    pub show_help: bool,
    /// Cursor index into `rows`
    pub cursor: usize,
    /// First row drawn in the list
    pub scroll_offset: usize,
    /// Highlighted entry in the sort choice list
    pub sort_menu_cursor: usize,
    /// One-shot message for the status row, cleared on the next key
    pub status_message: Option<String>,
    /// Sorted rows currently displayed
    rows: Vec<TaskRow>,
    /// Set by the store subscription whenever tasks change
    rows_stale: Rc<Cell<bool>>,
}

impl App {
    pub fn new(mut store: TaskStore, config: &AppConfig, sort: SortKey) -> Self {
        let rows_stale = Rc::new(Cell::new(true));
        let flag = Rc::clone(&rows_stale);
        store.subscribe(move |_| flag.set(true));

        let mut app = App {
            store,
            sort: SortSelector::new(sort),
            form: CreationForm::new(),
            mode: Mode::Navigate,
            should_quit: false,
            theme: Theme::from_config(&config.ui),
            title: config.title.clone(),
            show_key_hints: config.ui.show_key_hints,
            show_help: false,
            cursor: 0,
            scroll_offset: 0,
            sort_menu_cursor: 0,
            status_message: None,
            rows: Vec::new(),
            rows_stale,
        };
        app.refresh_rows();
        app
    }

    /// Build the app the way `td` starts: seeded from config
    pub fn from_startup(startup: &Startup) -> Self {
        let store = initial_store(&startup.config.seed, startup.empty);
        App::new(store, &startup.config, startup.sort)
    }

    pub fn rows(&self) -> &[TaskRow] {
        &self.rows
    }

    /// Rebuild the displayed rows if the store changed since the last build.
    pub fn refresh_rows(&mut self) {
        if self.rows_stale.replace(false) {
            self.rows = build_rows(&self.store, self.sort.active());
        }
        self.clamp_cursor();
    }

    fn invalidate_rows(&mut self) {
        self.rows_stale.set(true);
    }

    fn clamp_cursor(&mut self) {
        if self.rows.is_empty() {
            self.cursor = 0;
        } else {
            self.cursor = self.cursor.min(self.rows.len() - 1);
        }
    }

    /// Put the cursor back on `id` after a re-sort
    fn follow(&mut self, id: TaskId) {
        if let Some(idx) = row_index(&self.rows, id) {
            self.cursor = idx;
        }
    }

    /// Task under the cursor
    pub fn cursor_task_id(&self) -> Option<TaskId> {
        self.rows.get(self.cursor).map(|r| r.id)
    }

    pub fn move_cursor(&mut self, delta: isize) {
        if self.rows.is_empty() {
            return;
        }
        let max = self.rows.len() - 1;
        self.cursor = self.cursor.saturating_add_signed(delta).min(max);
    }

    pub fn cursor_to_top(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_to_bottom(&mut self) {
        self.cursor = self.rows.len().saturating_sub(1);
    }

    /// Toggle done on the cursor task; the cursor stays on it.
    pub fn toggle_cursor_task(&mut self) {
        let Some(id) = self.cursor_task_id() else {
            return;
        };
        self.store.toggle_done(id);
        self.refresh_rows();
        self.follow(id);
    }

    /// Delete the cursor task immediately.
    pub fn delete_cursor_task(&mut self) {
        let Some(id) = self.cursor_task_id() else {
            return;
        };
        if let Some(task) = self.store.remove(id) {
            self.status_message = Some(format!("deleted \"{}\"", task.name));
        }
        self.refresh_rows();
    }

    pub fn open_sort_menu(&mut self) {
        self.sort_menu_cursor = SortKey::ALL
            .iter()
            .position(|k| *k == self.sort.active())
            .unwrap_or(0);
        self.mode = Mode::SortMenu;
    }

    pub fn close_sort_menu(&mut self) {
        self.mode = Mode::Navigate;
    }

    /// Apply a sort key and close the choice list.
    pub fn select_sort(&mut self, key: SortKey) {
        let current = self.cursor_task_id();
        if self.sort.set_active(key) {
            self.invalidate_rows();
            self.refresh_rows();
            if let Some(id) = current {
                self.follow(id);
            }
        }
        self.close_sort_menu();
    }

    pub fn open_form(&mut self) {
        self.form.open();
        self.mode = Mode::Form;
    }

    pub fn cancel_form(&mut self) {
        self.form.cancel();
        self.mode = Mode::Navigate;
    }

    /// Commit the form. An empty name keeps the form open with a message.
    pub fn confirm_form(&mut self) {
        match self.form.confirm(&mut self.store) {
            Ok(task) => {
                self.mode = Mode::Navigate;
                self.refresh_rows();
                self.follow(task.id);
            }
            Err(FormError::Closed) => self.mode = Mode::Navigate,
            Err(e) => self.status_message = Some(e.to_string()),
        }
    }

    /// Apply the display parts of a reloaded config. Tasks and the active
    /// sort are left alone.
    pub fn apply_config(&mut self, config: &AppConfig) {
        self.theme = Theme::from_config(&config.ui);
        self.title = config.title.clone();
        self.show_key_hints = config.ui.show_key_hints;
    }
}

fn reload_config(app: &mut App, event: ConfigEvent) {
    let ConfigEvent::Changed(path) = event;
    match config_io::read_config(&path) {
        Ok(Some(config)) => {
            tracing::info!(path = %path.display(), "config reloaded");
            app.apply_config(&config);
            app.status_message = Some("config reloaded".to_string());
        }
        Ok(None) => {}
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "config reload failed");
            app.status_message = Some(format!("config not reloaded: {}", e));
        }
    }
}

fn start_watcher(startup: &Startup) -> Option<ConfigWatcher> {
    let path = startup.config_path.as_deref()?;
    match ConfigWatcher::start(path) {
        Ok(w) => Some(w),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "config watcher not started");
            None
        }
    }
}

/// Run the TUI application
pub fn run(startup: Startup) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::from_startup(&startup);
    let watcher = start_watcher(&startup);
    tracing::info!(tasks = app.store.len(), sort = %app.sort.active(), "starting tui");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app, watcher.as_ref());

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    tracing::info!(tasks = app.store.len(), "tui exited");
    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    watcher: Option<&ConfigWatcher>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut needs_redraw = true;
    loop {
        if needs_redraw {
            terminal.draw(|frame| render::render(frame, app))?;
            needs_redraw = false;
        }

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key);
                    needs_redraw = true;
                }
                Event::Paste(text) => {
                    input::handle_paste(app, &text);
                    needs_redraw = true;
                }
                Event::Resize(_, _) => needs_redraw = true,
                _ => {}
            }
        }

        if let Some(evt) = watcher.and_then(ConfigWatcher::poll) {
            reload_config(app, evt);
            needs_redraw = true;
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
