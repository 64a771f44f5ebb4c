//! Repository command handlers
//!
//! Handles listing, viewing, creating and updating repository configurations.

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;
use depot_client::{ALL_REPOSITORIES, DepotClient, HttpTransport, QueryParams};
use depot_core::{GenericRepoConfig, RepositoryConfig, RepositoryKind, RepositorySummary};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::config::Config;

/// Repository subcommands
#[derive(Subcommand)]
pub enum RepoCommands {
    /// List repositories
    List {
        /// Only list repositories of this kind (local, remote, virtual, ...)
        #[arg(short = 't', long = "type", default_value = ALL_REPOSITORIES)]
        kind: String,
    },
    /// Show a repository configuration
    Get {
        /// Repository key
        key: String,

        /// Print the raw JSON configuration
        #[arg(long)]
        json: bool,
    },
    /// Create a repository from a JSON configuration file
    Create {
        /// Repository key
        key: String,

        /// Path to the JSON configuration
        #[arg(short, long)]
        file: PathBuf,

        /// Extra query parameters as key=value pairs
        #[arg(short, long, value_parser = parse_key_val)]
        param: Vec<(String, String)>,
    },
    /// Update a repository from a JSON configuration file
    Update {
        /// Repository key
        key: String,

        /// Path to the JSON configuration
        #[arg(short, long)]
        file: PathBuf,

        /// Extra query parameters as key=value pairs
        #[arg(short, long, value_parser = parse_key_val)]
        param: Vec<(String, String)>,
    },
}

/// Parse a single key=value pair
fn parse_key_val(s: &str) -> Result<(String, String)> {
    let pos = s
        .find('=')
        .ok_or_else(|| anyhow::anyhow!("invalid KEY=value: no `=` found in `{}`", s))?;
    Ok((s[..pos].to_string(), s[pos + 1..].to_string()))
}

/// Handle repository commands
///
/// # Arguments
/// * `command` - The repository command to execute
/// * `config` - The CLI configuration
pub async fn handle_repo_command(command: RepoCommands, config: &Config) -> Result<()> {
    let transport = HttpTransport::new(config.transport_config())
        .context("Failed to build HTTP client")?;
    let client = DepotClient::new(transport);

    match command {
        RepoCommands::List { kind } => list_repositories(&client, &kind).await,
        RepoCommands::Get { key, json } => get_repository(&client, &key, json).await,
        RepoCommands::Create { key, file, param } => {
            let repo = load_config(&file)?;
            check_key(&key, &repo);
            let query: QueryParams = param.into_iter().collect();
            client.create_repository(&key, &repo, &query).await?;
            info!(key = %key, "Repository created");
            println!(
                "{}",
                format!("✓ Repository {} created successfully!", key)
                    .green()
                    .bold()
            );
            Ok(())
        }
        RepoCommands::Update { key, file, param } => {
            let repo = load_config(&file)?;
            check_key(&key, &repo);
            let query: QueryParams = param.into_iter().collect();
            client.update_repository(&key, &repo, &query).await?;
            info!(key = %key, "Repository updated");
            println!(
                "{}",
                format!("✓ Repository {} updated successfully!", key)
                    .green()
                    .bold()
            );
            Ok(())
        }
    }
}

/// Read a configuration file, dispatching on its `rclass`
fn load_config(path: &Path) -> Result<RepositoryConfig> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;

    RepositoryConfig::from_slice(&bytes)
        .with_context(|| format!("Failed to parse configuration file: {}", path.display()))
}

/// The server uses the path key; a different key in the body is most likely a mistake
fn check_key(key: &str, repo: &RepositoryConfig) {
    if !repo.key().is_empty() && repo.key() != key {
        warn!(
            path_key = key,
            body_key = repo.key(),
            "Configuration key differs from the requested key"
        );
    }
}

/// List repositories
async fn list_repositories(client: &DepotClient, kind: &str) -> Result<()> {
    let repos = client.list_repositories(kind).await?;

    if repos.is_empty() {
        println!("{}", "No repositories found.".yellow());
    } else {
        println!(
            "{}",
            format!("Found {} repository(ies):", repos.len()).bold()
        );
        println!();
        for repo in repos {
            print_repository_summary(&repo);
        }
    }

    Ok(())
}

/// Get and display a single repository
async fn get_repository(client: &DepotClient, key: &str, json: bool) -> Result<()> {
    let repo = client.get_repository(key).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&repo)?);
    } else {
        print_repository_details(&repo);
    }

    Ok(())
}

/// Print a repository summary
fn print_repository_summary(repo: &RepositorySummary) {
    println!("  {} {}", "▸".cyan(), repo.key.bold());
    println!("    Type:        {}", colorize_kind(&repo.kind));
    if let Some(desc) = &repo.description {
        println!("    Description: {}", desc.dimmed());
    }
    if let Some(url) = &repo.url {
        println!("    URL:         {}", url.dimmed());
    }
    println!();
}

/// Print detailed repository information
fn print_repository_details(repo: &RepositoryConfig) {
    println!("{}", "Repository Details:".bold());
    print_base(repo.base(), &repo.kind());

    match repo {
        RepositoryConfig::Local(local) => {
            print_opt("Layout", &local.layout_ref);
            print_opt("Checksums", &local.checksum_policy_type);
            print_opt("Snapshots", &local.snapshot_version_behavior);
        }
        RepositoryConfig::Remote(remote) => {
            println!("  URL:         {}", remote.url.cyan());
            print_opt("Username", &remote.username);
            print_opt("Proxy", &remote.proxy);
            print_opt("Checksums", &remote.remote_repo_checksum_policy_type);
            if remote.offline == Some(true) {
                println!("  Offline:     {}", "yes".red());
            }
        }
        RepositoryConfig::Virtual(virt) => {
            if virt.repositories.is_empty() {
                println!("  Members:     {}", "none".dimmed());
            } else {
                println!("  Members:");
                for member in &virt.repositories {
                    println!("    - {}", member);
                }
            }
            print_opt("Key pair", &virt.key_pair);
        }
        RepositoryConfig::Generic(_) => {}
    }
}

fn print_base(base: &GenericRepoConfig, kind: &RepositoryKind) {
    println!("  Key:         {}", base.key.cyan());
    println!("  Class:       {}", colorize_kind(kind));
    print_opt("Package", &base.package_type);
    print_opt("Description", &base.description);
    print_opt("Notes", &base.notes);
    print_opt("Includes", &base.includes_pattern);
    print_opt("Excludes", &base.excludes_pattern);
    if base.blacked_out == Some(true) {
        println!("  Blacked out: {}", "yes".red());
    }
    if !base.property_sets.is_empty() {
        println!("  Properties:  {}", base.property_sets.join(", "));
    }
}

fn print_opt(label: &str, value: &Option<String>) {
    if let Some(value) = value {
        println!("  {:<12} {}", format!("{}:", label), value);
    }
}

/// Colorize a repository kind for display
fn colorize_kind(kind: &RepositoryKind) -> colored::ColoredString {
    match kind {
        RepositoryKind::Local => kind.as_str().green(),
        RepositoryKind::Remote => kind.as_str().blue(),
        RepositoryKind::Virtual => kind.as_str().magenta(),
        RepositoryKind::Unknown(tag) => tag.as_str().dimmed(),
    }
}
