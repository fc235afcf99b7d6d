use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::sort::SortKey;

/// Configuration from config.toml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Title shown in the top bar
    #[serde(default = "default_title")]
    pub title: String,
    /// Sort key active at startup
    #[serde(default)]
    pub default_sort: SortKey,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub seed: SeedConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            title: default_title(),
            default_sort: SortKey::default(),
            ui: UiConfig::default(),
            log: LogConfig::default(),
            seed: SeedConfig::default(),
        }
    }
}

/// Default: see src/templates/config.toml
fn default_title() -> String {
    "My TODO List".to_string()
}

/// Default: see src/templates/config.toml
fn default_true() -> bool {
    true
}

/// Default: see src/templates/config.toml
fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Show the key hint line in the status row
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Hex color overrides keyed by theme slot (e.g. `highlight = "#FB4196"`)
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            colors: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log file. The TUI owns the terminal, so without a file it does not log.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Filter directive used when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            file: None,
            level: default_log_level(),
        }
    }
}

/// Tasks present when the app starts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Start with the built-in sample tasks
    #[serde(default = "default_true")]
    pub samples: bool,
    /// Extra tasks appended after the samples
    #[serde(default)]
    pub tasks: Vec<SeedTask>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        SeedConfig {
            samples: true,
            tasks: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedTask {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub done: bool,
}
