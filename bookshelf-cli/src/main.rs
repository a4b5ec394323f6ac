//! bookshelf: serve the book catalog over HTTP
//!
//! Usage:
//!   bookshelf                                  # 127.0.0.1:5000, ./bookshelf.db
//!   bookshelf -b 0.0.0.0:8080                  # custom bind address
//!   bookshelf --database-url sqlite://cat.db   # custom database
//!   RUST_LOG=debug bookshelf                   # fine-grained log control

use std::net::SocketAddr;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use bookshelf_server::db::{create_pool, ensure_schema};
use bookshelf_server::{run_server, ServerConfig};

const DEFAULT_DATABASE_URL: &str = "sqlite://bookshelf.db?mode=rwc";

#[derive(Parser, Debug)]
#[command(name = "bookshelf", about = "HTTP server for the bookshelf catalog")]
struct Cli {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "127.0.0.1:5000")]
    bind: SocketAddr,

    /// Database URL (overrides the DATABASE_URL environment variable)
    #[arg(long)]
    database_url: Option<String>,
}

fn init_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing().ok();
    let cli = Cli::parse();

    let database_url = cli
        .database_url
        .or_else(|| std::env::var("DATABASE_URL").ok())
        .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

    let pool = create_pool(&database_url)
        .await
        .with_context(|| format!("failed to open database {database_url}"))?;
    ensure_schema(&pool)
        .await
        .context("failed to prepare books table")?;

    tracing::info!("starting bookshelf server on {}", cli.bind);

    let config = ServerConfig {
        bind_addr: cli.bind,
    };
    run_server(pool, config).await.context("server error")?;

    Ok(())
}
