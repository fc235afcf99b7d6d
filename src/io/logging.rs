use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::model::config::LogConfig;

/// Where log output goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// The terminal UI: only the configured file, or nothing
    Tui,
    /// Headless commands: the configured file, or stderr at `warn`
    Cli,
}

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global tracing subscriber. Safe to call once per process;
/// later calls are ignored.
pub fn init_logging(config: &LogConfig, target: LogTarget) -> std::io::Result<()> {
    if let Some(path) = &config.file {
        return init_file(path, &config.level);
    }
    if target == LogTarget::Cli {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter("warn"))
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }
    Ok(())
}

fn init_file(path: &Path, level: &str) -> std::io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
