use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::model::sort::SortKey;

#[derive(Parser)]
#[command(name = "td", about = concat!("[x] td v", env!("CARGO_PKG_VERSION"), " - a single-screen to-do list"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (default: $TODOLIST_CONFIG, then ~/.config/todolist/config.toml)
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Sort key to start with (overrides default_sort)
    #[arg(long, value_enum, global = true)]
    pub sort: Option<SortKey>,

    /// Start with no tasks (ignore seed tasks)
    #[arg(long, global = true)]
    pub empty: bool,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the startup task list, sorted
    List,
    /// Show or edit the config file
    Config(ConfigCmd),
}

#[derive(Args)]
pub struct ConfigCmd {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the effective config as TOML
    Show,
    /// Print the config file path
    Path,
    /// Write a commented default config file
    Init(ConfigInitArgs),
    /// Set the startup sort key, keeping the file's comments
    SetSort(SetSortArgs),
}

#[derive(Args)]
pub struct ConfigInitArgs {
    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

#[derive(Args)]
pub struct SetSortArgs {
    /// New default sort key
    #[arg(value_enum)]
    pub key: SortKey,
}
