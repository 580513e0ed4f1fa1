use crate::config::AppConfig;
use crate::errors::{AppError, AppResult};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

pub mod commands;
pub mod render;

/// Bitcoin Transaction Anatomy Explorer
#[derive(Parser)]
#[command(name = "txp")]
#[command(about = "Bitcoin Transaction Anatomy Explorer")]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to ./txp.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Decode a raw transaction into labelled segments
    Decode(commands::decode::DecodeCommand),
    /// Interactively expand and collapse segments of a transaction
    Inspect(commands::inspect::InspectCommand),
    /// List the reference text for every segment kind
    Catalog(commands::catalog::CatalogCommand),
}

pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_from(cli.config.as_deref())
        .map_err(|e| AppError::Config(format!("Failed to load configuration: {}", e)))?;

    // RUST_LOG wins; otherwise the configured level. Logs go to stderr so
    // rendered output on stdout stays clean.
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level)),
        )
        .try_init();

    debug!("Loaded configuration: {:?}", config);

    match cli.command {
        Commands::Decode(command) => command.run(&config),
        Commands::Inspect(command) => command.run(&config),
        Commands::Catalog(command) => command.run(&config),
    }
}
