mod commands;
mod output;

use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fintel_api::{Client, ClientConfig};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "fintel")]
#[command(about = "Daily market digest, stock details and market events from the fintel service")]
struct Cli {
    /// Output format: table, json, csv or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Service base URL (overrides FINTEL_API_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Request timeout in seconds (at least 1)
    #[arg(long, default_value = "10", global = true, value_parser = clap::value_parser!(u64).range(1..))]
    timeout: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Today's digest, past digests, or the recommendation track record
    Digest(commands::digest::DigestArgs),
    /// Details, history, news or filings for one ticker
    Stock(commands::stock::StockArgs),
    /// Earnings, SEC filings, macro releases and insider trades
    Events(commands::events::EventsArgs),
    /// Check that the service is up and ready
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("fintel=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "csv" => OutputFormat::Csv,
        "markdown" | "md" => OutputFormat::Markdown,
        _ => OutputFormat::Table,
    };

    let mut config = ClientConfig::from_env()?;
    if let Some(ref base_url) = cli.base_url {
        config = config.with_base_url(base_url)?;
    }
    let config = config.with_timeout(Duration::from_secs(cli.timeout));
    let client = Client::new(config)?;
    tracing::debug!("Using service at {}", client.config().base_url());

    let result = match &cli.command {
        Commands::Digest(args) => commands::digest::run(args, &client, &format).await,
        Commands::Stock(args) => commands::stock::run(args, &client, &format).await,
        Commands::Events(args) => commands::events::run(args, &client, &format).await,
        Commands::Health => commands::health::run(&client, &format).await,
    };

    if let Err(err) = result {
        eprintln!("Error: {}", describe_error(&err));
        std::process::exit(1);
    }

    Ok(())
}

/// Maps client failures to messages that tell a slow service from a down one.
fn describe_error(err: &anyhow::Error) -> String {
    match err.downcast_ref::<fintel_api::Error>() {
        Some(fintel_api::Error::Timeout { url }) => {
            format!("service is slow to respond (timed out waiting for {})", url)
        }
        Some(fintel_api::Error::Transport(e)) => {
            format!("service is unreachable: {}", e)
        }
        Some(e @ fintel_api::Error::NotFound { .. }) => {
            e.detail().unwrap_or_else(|| e.to_string())
        }
        Some(e @ fintel_api::Error::HttpStatus { status, .. }) => match e.detail() {
            Some(detail) => format!("service returned {}: {}", status, detail),
            None => e.to_string(),
        },
        _ => format!("{:#}", err),
    }
}
