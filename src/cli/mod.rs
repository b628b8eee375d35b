//! Command-line interface definitions and dispatch.

mod cache;
mod validate;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use workcache::config::Config;

#[derive(Parser)]
#[command(name = "workcache", version, about = "Workflow result cache management")]
pub(crate) struct Cli {
    /// Path to the configuration file (defaults to ~/.workcache/config.yaml).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Show cache statistics.
    Stats,
    /// Remove cached entries matching the given filters.
    Invalidate {
        /// Only remove entries for this department.
        #[arg(long)]
        department: Option<String>,
        /// Only remove entries produced by this backend.
        #[arg(long)]
        backend: Option<String>,
    },
    /// Remove every cached entry.
    Clear,
    /// Validate the configuration and report errors and warnings.
    Validate,
}

pub(crate) fn dispatch(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Command::Stats => cache::cmd_stats(&config),
        Command::Invalidate {
            department,
            backend,
        } => cache::cmd_invalidate(&config, department.as_deref(), backend.as_deref()),
        Command::Clear => cache::cmd_clear(&config),
        Command::Validate => validate::cmd_validate(&config),
    }
}
