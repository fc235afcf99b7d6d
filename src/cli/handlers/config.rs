use std::path::Path;

use crate::cli::commands::ConfigAction;
use crate::io::config_io::{self, ConfigError};

/// Config subcommands. Only `show` parses the file; the others work on the
/// resolved path so a missing or broken config can still be (re)written.
pub fn cmd_config(
    action: &ConfigAction,
    explicit: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let (config, _) = config_io::load_config(explicit)?;
            print!("{}", config_io::config_to_string(&config)?);
        }
        ConfigAction::Path => {
            let path = config_io::resolve_config_path(explicit).ok_or(ConfigError::NoConfigPath)?;
            println!("{}", path.display());
        }
        ConfigAction::Init(args) => {
            let path = config_io::resolve_config_path(explicit).ok_or(ConfigError::NoConfigPath)?;
            config_io::init_config(&path, args.force)?;
            println!("wrote {}", path.display());
        }
        ConfigAction::SetSort(args) => {
            let path = config_io::resolve_config_path(explicit).ok_or(ConfigError::NoConfigPath)?;
            let mut doc = config_io::read_config_doc(&path)?;
            config_io::set_default_sort(&mut doc, args.key);
            config_io::write_config_doc(&path, &doc)?;
            tracing::info!(path = %path.display(), sort = %args.key, "default sort updated");
            println!("default_sort = \"{}\"", args.key);
        }
    }
    Ok(())
}
