mod commands;
mod output;
mod validation;

use anyhow::Result;
use boston311_api::Client;
use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "boston311")]
#[command(about = "Query Boston 311 service types and service requests")]
struct Cli {
    /// Output format: table, json, csv, or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Override the Open311 endpoint (defaults to the City of Boston)
    #[arg(long, env = "BOSTON311_API_URL", global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List requestable service types
    Services(commands::services::ServicesArgs),
    /// List distinct service groups
    Groups,
    /// Look up a single service request by ID
    Request(commands::request::RequestArgs),
    /// List service requests matching filters
    Requests(commands::requests::RequestsArgs),
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("boston311=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "csv" => OutputFormat::Csv,
        "markdown" | "md" => OutputFormat::Markdown,
        _ => OutputFormat::Table,
    };

    let client = match cli.base_url.as_deref() {
        Some(url) => Client::with_base_url(url),
        None => Client::new(),
    };
    tracing::debug!("Using endpoint {}", client.base_url());

    match &cli.command {
        Commands::Services(args) => commands::services::run(args, &client, &format)?,
        Commands::Groups => commands::services::run_groups(&client, &format)?,
        Commands::Request(args) => commands::request::run(args, &client, &format)?,
        Commands::Requests(args) => commands::requests::run(args, &client, &format)?,
    }

    Ok(())
}
