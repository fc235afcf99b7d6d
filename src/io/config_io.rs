use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::model::config::AppConfig;
use crate::model::sort::SortKey;

/// Environment variable naming the config file
pub const CONFIG_ENV: &str = "TODOLIST_CONFIG";

/// Commented default config written by `td config init`
pub const CONFIG_TEMPLATE: &str = include_str!("../templates/config.toml");

/// Error type for config I/O
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no config path: set --config, TODOLIST_CONFIG, XDG_CONFIG_HOME or HOME")]
    NoConfigPath,
    #[error("config file not found: {0}")]
    NotFound(PathBuf),
    #[error("config file already exists: {0} (use --force to overwrite)")]
    AlreadyExists(PathBuf),
    #[error("could not read {path}: {source}")]
    ReadError { path: PathBuf, source: io::Error },
    #[error("could not write {path}: {source}")]
    WriteError { path: PathBuf, source: io::Error },
    #[error("could not parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("could not serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
    #[error("could not edit config: {0}")]
    EditError(#[from] toml_edit::TomlError),
}

/// Where the config lives when no `--config` is given:
/// `$TODOLIST_CONFIG`, then `$XDG_CONFIG_HOME/todolist/config.toml`,
/// then `$HOME/.config/todolist/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    if let Some(path) = non_empty_env(CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }
    let base = non_empty_env("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| non_empty_env("HOME").map(|home| Path::new(&home).join(".config")))?;
    Some(base.join("todolist").join("config.toml"))
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

/// Resolve the config path, preferring an explicit one.
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    explicit.map(Path::to_path_buf).or_else(default_config_path)
}

/// Parse config text.
pub fn parse_config(text: &str) -> Result<AppConfig, ConfigError> {
    Ok(toml::from_str(text)?)
}

/// Read and parse a config file. A missing file yields `Ok(None)`.
pub fn read_config(path: &Path) -> Result<Option<AppConfig>, ConfigError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(ConfigError::ReadError {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };
    parse_config(&text).map(Some)
}

/// Load the effective config.
///
/// An explicitly given path must exist; the default location may be absent,
/// in which case built-in defaults are used.
pub fn load_config(explicit: Option<&Path>) -> Result<(AppConfig, Option<PathBuf>), ConfigError> {
    let Some(path) = resolve_config_path(explicit) else {
        return Ok((AppConfig::default(), None));
    };
    match read_config(&path)? {
        Some(config) => {
            tracing::info!(path = %path.display(), "loaded config");
            Ok((config, Some(path)))
        }
        None if explicit.is_some() => Err(ConfigError::NotFound(path)),
        None => Ok((AppConfig::default(), Some(path))),
    }
}

/// Render a config as TOML text.
pub fn config_to_string(config: &AppConfig) -> Result<String, ConfigError> {
    Ok(toml::to_string_pretty(config)?)
}

/// Write the commented default config to `path`.
pub fn init_config(path: &Path, force: bool) -> Result<(), ConfigError> {
    if path.exists() && !force {
        return Err(ConfigError::AlreadyExists(path.to_path_buf()));
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }
    atomic_write(path, CONFIG_TEMPLATE.as_bytes()).map_err(|e| ConfigError::WriteError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Read the config file as a toml_edit document for format-preserving edits.
pub fn read_config_doc(path: &Path) -> Result<toml_edit::DocumentMut, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ConfigError::NotFound(path.to_path_buf()),
        _ => ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        },
    })?;
    Ok(text.parse()?)
}

/// Write the document back to disk, preserving formatting.
pub fn write_config_doc(path: &Path, doc: &toml_edit::DocumentMut) -> Result<(), ConfigError> {
    let text = doc.to_string();
    // Refuse to write something we could not load again
    parse_config(&text)?;
    atomic_write(path, text.as_bytes()).map_err(|e| ConfigError::WriteError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Update the default_sort field in the config document
pub fn set_default_sort(doc: &mut toml_edit::DocumentMut, key: SortKey) {
    doc["default_sort"] = toml_edit::value(key.as_str());
}

/// Write `content` to `path` atomically using a temp file + rename.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_config() -> &'static str {
        r#"# my settings
title = "Chores"

# keep done tasks last
default_sort = "name"

[seed]
samples = false
"#
    }

    #[test]
    fn template_parses_to_defaults() {
        let config = parse_config(CONFIG_TEMPLATE).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn read_missing_returns_none() {
        let tmp = TempDir::new().unwrap();
        assert!(read_config(&tmp.path().join("nope.toml")).unwrap().is_none());
    }

    #[test]
    fn load_explicit_missing_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nope.toml");
        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(p) if p == path));
    }

    #[test]
    fn load_explicit_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, sample_config()).unwrap();
        let (config, used) = load_config(Some(&path)).unwrap();
        assert_eq!(config.title, "Chores");
        assert!(!config.seed.samples);
        assert_eq!(used, Some(path));
    }

    #[test]
    fn read_malformed_is_parse_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "title = [").unwrap();
        assert!(matches!(read_config(&path), Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn init_writes_template_once() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested/dir/config.toml");
        init_config(&path, false).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), CONFIG_TEMPLATE);

        assert!(matches!(
            init_config(&path, false),
            Err(ConfigError::AlreadyExists(_))
        ));
        fs::write(&path, "title = \"x\"").unwrap();
        init_config(&path, true).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), CONFIG_TEMPLATE);
    }

    #[test]
    fn set_sort_preserves_comments() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, sample_config()).unwrap();

        let mut doc = read_config_doc(&path).unwrap();
        set_default_sort(&mut doc, SortKey::Done);
        write_config_doc(&path, &doc).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("# my settings"));
        assert!(written.contains("# keep done tasks last"));
        assert!(written.contains("default_sort = \"done\""));
        let config = parse_config(&written).unwrap();
        assert_eq!(config.default_sort, SortKey::Done);
        assert_eq!(config.title, "Chores");
    }

    #[test]
    fn set_sort_adds_missing_key() {
        let mut doc: toml_edit::DocumentMut = "title = \"x\"\n".parse().unwrap();
        set_default_sort(&mut doc, SortKey::Done);
        let config = parse_config(&doc.to_string()).unwrap();
        assert_eq!(config.default_sort, SortKey::Done);
    }

    #[test]
    fn config_round_trips_through_toml() {
        let config = AppConfig::default();
        let text = config_to_string(&config).unwrap();
        assert_eq!(parse_config(&text).unwrap(), config);
    }
}
