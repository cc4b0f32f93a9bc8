//! `ci-demo` CLI entry-point.
//!
//! Available sub-commands:
//! - `serve`   — start the health service.
//! - `wait-db` — wait until the database accepts connections.

use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "ci-demo",
    about = "Minimal service for exercising a CI pipeline",
    version = utils::VERSION
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the HTTP health service.
    Serve {
        /// Address to listen on. Loopback unless told otherwise.
        #[arg(long, env = "CI_DEMO_BIND", default_value = "127.0.0.1:8000")]
        bind: String,
    },
    /// Block until the database is ready, then exit.
    WaitDb {
        #[arg(long, env = "DATABASE_URL")]
        database_url: String,
        /// Total connection attempts before giving up.
        #[arg(long, default_value_t = db::readiness::DEFAULT_MAX_ATTEMPTS)]
        attempts: u32,
        /// Pause between failed attempts, in milliseconds.
        #[arg(long, default_value_t = db::readiness::DEFAULT_RETRY_DELAY_MS)]
        retry_delay_ms: u64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve { bind } => {
            info!("Starting ci-demo {} on {bind}", utils::VERSION);
            api::serve(&bind).await.context("health service failed")?;
        }
        Command::WaitDb {
            database_url,
            attempts,
            retry_delay_ms,
        } => {
            let config = db::ReadinessConfig {
                max_attempts: attempts,
                retry_delay: Duration::from_millis(retry_delay_ms),
            };
            wait_db(&database_url, &config).await?;
            info!("Database is ready");
        }
    }

    Ok(())
}

/// Run the readiness probe against `database_url`; returns the attempt that succeeded.
async fn wait_db(database_url: &str, config: &db::ReadinessConfig) -> anyhow::Result<u32> {
    db::wait_for_ready(|| Ok(db::connect(database_url)), config)
        .await
        .context("database readiness check failed")
}
