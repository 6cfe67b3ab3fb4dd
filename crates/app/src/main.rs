use clap::Parser;
use client::ApiClient;

use crate::{commands::Command, session::SessionStore};

mod commands;
mod error;
mod prompt;
mod session;
mod settings;

#[derive(Debug, Parser)]
#[command(name = "arto", about = "Personal finance client for the Arto backend")]
struct Cli {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override base URL (e.g. http://127.0.0.1:3000).
    #[arg(long)]
    base_url: Option<String>,
    /// Override session file path.
    #[arg(long)]
    session_file: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();
    let settings = settings::load(
        cli.config.as_deref(),
        cli.base_url.as_deref(),
        cli.session_file.as_deref(),
    )?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "arto={level},client={level},engine={level}",
            level = settings.level
        ))
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(base_url = %settings.base_url, "configured");

    let api = ApiClient::new(reqwest::Client::new(), &settings.base_url);
    let sessions = SessionStore::new(&settings.session_file);

    commands::run(cli.command, &api, &sessions).await?;
    Ok(())
}
