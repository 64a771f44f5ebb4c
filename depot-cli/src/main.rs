//! Depot CLI
//!
//! Command-line interface for managing repository configurations.

mod commands;
mod config;

use anyhow::{Context, Result};
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "depot")]
#[command(about = "Repository configuration CLI", long_about = None)]
struct Cli {
    /// Base URL of the server API
    #[arg(
        long,
        env = "DEPOT_URL",
        default_value = "http://localhost:8081/artifactory"
    )]
    url: String,

    /// Username for basic authentication
    #[arg(long, env = "DEPOT_USERNAME")]
    username: Option<String>,

    /// Password for basic authentication
    #[arg(long, env = "DEPOT_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// API key
    #[arg(long, env = "DEPOT_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Access token
    #[arg(long, env = "DEPOT_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Skip TLS certificate verification
    #[arg(long, env = "DEPOT_INSECURE")]
    insecure: bool,

    /// Request timeout in seconds
    #[arg(long, env = "DEPOT_TIMEOUT")]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Connection settings from the global flags
    fn config(&self) -> Config {
        Config {
            username: self.username.clone(),
            password: self.password.clone(),
            api_key: self.api_key.clone(),
            token: self.token.clone(),
            insecure: self.insecure,
            timeout: self.timeout.map(Duration::from_secs),
            ..Config::new(&self.url)
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "depot=info,depot_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = cli.config();
    config.validate().context("Invalid configuration")?;

    handle_command(cli.command, &config).await
}
