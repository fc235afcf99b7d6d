mod config;
pub use config::cmd_config;

use std::path::PathBuf;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::config_io::{self, ConfigError};
use crate::io::logging::{LogTarget, init_logging};
use crate::model::config::AppConfig;
use crate::model::sort::SortKey;
use crate::ops::seed::initial_store;
use crate::ops::sort::sorted;
use crate::ops::view::build_rows;

/// Config plus the command-line overrides every command shares
#[derive(Debug, Clone)]
pub struct Startup {
    pub config: AppConfig,
    /// Config file in effect (may not exist yet)
    pub config_path: Option<PathBuf>,
    pub sort: SortKey,
    pub empty: bool,
}

impl Startup {
    /// Load config and apply `--sort` / `--empty`.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let (config, config_path) = config_io::load_config(cli.config.as_deref())?;
        let sort = cli.sort.unwrap_or(config.default_sort);
        Ok(Startup {
            config,
            config_path,
            sort,
            empty: cli.empty,
        })
    }
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match &cli.command {
        // Config commands must work when the file is missing or malformed
        Some(Commands::Config(cmd)) => {
            let log = config_io::load_config(cli.config.as_deref())
                .map(|(config, _)| config.log)
                .unwrap_or_default();
            init_logging(&log, LogTarget::Cli)?;
            cmd_config(&cmd.action, cli.config.as_deref())
        }
        Some(Commands::List) => {
            let startup = Startup::from_cli(&cli)?;
            init_logging(&startup.config.log, LogTarget::Cli)?;
            cmd_list(&startup, cli.json)
        }
        None => {
            let startup = Startup::from_cli(&cli)?;
            init_logging(&startup.config.log, LogTarget::Tui)?;
            crate::tui::run(startup)
        }
    }
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_list(startup: &Startup, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = initial_store(&startup.config.seed, startup.empty);

    if json {
        let list = task_list_json(sorted(store.all(), startup.sort), startup.sort);
        println!("{}", serde_json::to_string_pretty(&list)?);
    } else {
        for line in format_listing(&build_rows(&store, startup.sort)) {
            println!("{}", line);
        }
    }
    Ok(())
}
