use std::path::{Path, PathBuf};
use std::sync::mpsc;

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

/// Events sent from the config watcher to the TUI event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigEvent {
    /// The config file was created or changed on disk.
    Changed(PathBuf),
}

/// Watches the config file so theme and title edits apply live.
///
/// Editors often replace files by rename, so the parent directory is watched
/// and events are filtered down to the config file itself.
pub struct ConfigWatcher {
    _watcher: RecommendedWatcher,
    rx: mpsc::Receiver<ConfigEvent>,
}

impl ConfigWatcher {
    /// Start watching `config_path`. Its directory must exist.
    pub fn start(config_path: &Path) -> Result<Self, notify::Error> {
        let (tx, rx) = mpsc::channel();
        let target = config_path.to_path_buf();
        let dir = config_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."))
            .to_path_buf();

        let mut watcher = RecommendedWatcher::new(
            move |result: Result<Event, notify::Error>| {
                let event = match result {
                    Ok(e) => e,
                    Err(_) => return,
                };
                if is_config_change(&event, &target) {
                    let _ = tx.send(ConfigEvent::Changed(target.clone()));
                }
            },
            Config::default(),
        )?;

        watcher.watch(&dir, RecursiveMode::NonRecursive)?;
        Ok(ConfigWatcher {
            _watcher: watcher,
            rx,
        })
    }

    /// Non-blocking poll for pending events, collapsed to at most one.
    pub fn poll(&self) -> Option<ConfigEvent> {
        let mut last = None;
        while let Ok(evt) = self.rx.try_recv() {
            last = Some(evt);
        }
        last
    }
}

/// Whether a filesystem event touches the config file
fn is_config_change(event: &Event, target: &Path) -> bool {
    match event.kind {
        EventKind::Create(_) | EventKind::Modify(_) => {}
        _ => return false,
    }
    let name = target.file_name();
    event
        .paths
        .iter()
        .any(|p| p == target || (name.is_some() && p.file_name() == name))
}
