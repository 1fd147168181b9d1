use std::process;

use clap::Parser;
use colored::Colorize;
use github_client::{create_token_client, GitHubClient};
use label_sync_cli::commands::{self, Commands};
use label_sync_cli::config::{self, AppConfig, ORGANIZATION_ENV_VAR, TOKEN_ENV_VAR};
use label_sync_cli::errors::Error;
use label_sync_cli::prompt::{DialoguerResolver, NonInteractiveResolver};
use label_sync_core::{LabelSync, SyncReport};
use tracing::{debug, error};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;

/// Environment variable holding the tracing filter
const LOG_FILTER_ENV_VAR: &str = "LABEL_SYNC_LOG";

/// label-sync CLI: Keep GitHub labels consistent across repositories
#[derive(Parser, Debug)]
#[command(name = "label-sync", version)]
#[command(about = "Keep GitHub labels consistent across repositories", long_about = None)]
struct Cli {
    /// Show debug logs and the full error chain
    #[arg(short, long)]
    debug: bool,

    /// Path to the configuration file
    #[arg(long)]
    config: Option<String>,

    /// Fail instead of prompting for values not given as arguments
    #[arg(long)]
    no_input: bool,

    #[command(subcommand)]
    command: Commands,
}

fn log_filter(debug: bool) -> EnvFilter {
    if debug {
        return EnvFilter::new("debug");
    }
    EnvFilter::try_from_env(LOG_FILTER_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("off"))
}

async fn run(cli: Cli) -> Result<SyncReport, Error> {
    let config = AppConfig::resolve(cli.config.as_deref())?
        .with_organization_override(std::env::var(ORGANIZATION_ENV_VAR).ok());
    let token = config::token_from(std::env::var(TOKEN_ENV_VAR).ok())?;

    let octocrab = create_token_client(&token, &config.api_base_url)?;
    let client = GitHubClient::new(octocrab, config.organization.clone());
    let store = config.state_store();
    debug!(
        organization = config.organization,
        repo_list = ?store.repo_list_path(),
        label_list = ?store.label_list_path(),
        "Using state files"
    );

    if cli.no_input {
        let sync = LabelSync::new(client, NonInteractiveResolver, store);
        commands::execute(&sync, cli.command).await
    } else {
        let sync = LabelSync::new(client, DialoguerResolver::new(), store);
        commands::execute(&sync, cli.command).await
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let debug = cli.debug;

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(log_filter(debug))
        .init();

    match run(cli).await {
        Ok(report) => {
            commands::print_report(&report);
            process::exit(commands::exit_code(&report));
        }
        Err(e) => {
            error!(error = %e, "Command failed");
            let message = if debug { e.chain() } else { e.to_string() };
            eprintln!("{}", format!("Error: {message}").red());
            process::exit(1);
        }
    }
}
