//! HTTP server command
//!
//! Runs the occupancy API with the connection string taken from the
//! flag, environment, or a local .env file.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;

use buswatch_server::db::create_pool;
use buswatch_server::{run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:3000)
    #[arg(long, short = 'b', default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Accept untrusted/self-signed database certificates.
    /// Connections stay encrypted but the server identity is not checked.
    #[arg(long)]
    pub tls_no_verify: bool,

    /// Database URL (overrides environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let database_url = args
        .database_url
        .or_else(|| std::env::var("DATABASE_URL").ok())
        .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")?;

    tracing::info!("Starting buswatch server on {}", args.bind);

    // Lazy pool: an unreachable store is logged at startup, not fatal
    let pool = create_pool(&database_url, args.tls_no_verify)
        .context("Failed to create database pool")?;

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    // Blocks until shutdown signal
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
