//! HTTP server command for the todoctl API
//!
//! Opens the SQLite database and runs the server until Ctrl+C / SIGTERM.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use todoctl_server::db::create_pool_with_options;
use todoctl_server::http::{run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "TODOCTL_BIND", default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    /// SQLite database file (created if missing)
    #[arg(long, short = 'd', env = "TODOCTL_DATABASE", default_value = "todos.db")]
    pub database: PathBuf,

    /// Maximum pooled database connections
    #[arg(long, env = "TODOCTL_MAX_CONNECTIONS", default_value_t = 5)]
    pub max_connections: u32,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!(
        database = %args.database.display(),
        "Starting todoctl server on {}",
        args.bind
    );

    let pool = create_pool_with_options(&args.database, args.max_connections)
        .await
        .with_context(|| format!("Failed to open database {}", args.database.display()))?;

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    // Blocks until shutdown
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
