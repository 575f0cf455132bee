//! `townhall` entry-point.
//!
//! Loads configuration from an env file, connects the Postgres pool, wires
//! each layer together (repository → service → handler state), and serves
//! the API until a shutdown signal arrives.

mod config;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use api::AppState;
use db::repository::{PgTownRepository, PgUserRepository};
use service::{TownService, UserService};

use crate::config::Config;

#[derive(Parser)]
#[command(name = "townhall", about = "CRUD backend service for users and towns", version)]
struct Cli {
    /// Path to the env file holding database and server settings.
    #[arg(long, default_value = ".env")]
    env_file: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cfg = Config::load(&cli.env_file)?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cfg.log_level))
        .init();

    let pool = db::pool::create_pool(&cfg.database_url(), 10)
        .await
        .context("database connection failed")?;

    let state = AppState {
        users: UserService::new(Arc::new(PgUserRepository::new(pool.clone()))),
        towns: TownService::new(Arc::new(PgTownRepository::new(pool.clone()))),
    };

    api::serve(&cfg.bind_addr(), state)
        .await
        .context("server failed")?;

    // Listener has stopped; close the pool after in-flight requests drain.
    pool.close().await;
    info!("Pool closed, exiting");

    Ok(())
}
