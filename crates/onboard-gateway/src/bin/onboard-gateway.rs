//! Onboard gateway binary.
//!
//! ```bash
//! onboard-gateway [--config onboard.toml] [--host 127.0.0.1] [--port 5000] \
//!     [--db onboard.db] [--seed] [--verbose]
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use onboard_core::config::OnboardConfig;
use onboard_gateway::Gateway;
use onboard_storage::{seed, StorageEngine};

/// Onboard — new-hire onboarding tracking and status prediction.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Optional TOML config file; flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Host to bind to.
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on.
    #[arg(short, long)]
    port: Option<u16>,

    /// SQLite database path.
    #[arg(long)]
    db: Option<PathBuf>,

    /// Seed the demo roster before serving.
    #[arg(long)]
    seed: bool,

    /// Enable verbose debug logging.
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let mut config = match &args.config {
        Some(path) => OnboardConfig::from_file(path)?,
        None => OnboardConfig::default(),
    };
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(db) = args.db {
        config.database.path = db;
    }

    let storage = Arc::new(StorageEngine::open(&config.database.path)?);
    tracing::info!(path = %config.database.path.display(), "database ready");

    if args.seed {
        seed::seed_demo_roster(&storage, chrono::Utc::now().date_naive())?;
    }

    let gateway = Gateway::new(&config, storage);
    gateway.start().await?;
    Ok(())
}
