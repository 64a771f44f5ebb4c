//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod repo;

pub use repo::RepoCommands;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Repository configuration management
    Repo {
        #[command(subcommand)]
        command: RepoCommands,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
///
/// # Arguments
/// * `command` - The command to execute
/// * `config` - The CLI configuration
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Repo { command } => repo::handle_repo_command(command, config).await,
    }
}
