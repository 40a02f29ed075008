//! todoctl CLI - to-do list HTTP service
//!
//! Entry point for the `todoctl` binary:
//! - `serve`: run the HTTP API over a local SQLite file

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "todoctl",
    author,
    version,
    about = "CRUD web service for a list of to-do items",
    long_about = "Serve create/read/update/delete endpoints for to-do items, \
                  persisted in a local SQLite database file."
)]
struct Cli {
    /// Enable debug logging (RUST_LOG still takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve(commands::serve::ServeArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Values from .env are visible to clap's `env` fallbacks
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
    }
    Ok(())
}
