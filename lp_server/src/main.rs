//! Simulated live poker tables server.
//!
//! Seeds a handful of simulated tables, starts the scheduler that deals
//! them forward one stage per tick, and serves their state over HTTP.

use std::sync::Arc;

use anyhow::Error;
use ctrlc::set_handler;
use log::info;
use pico_args::Arguments;

use live_poker::{Scheduler, TableRegistry};
use lp_server::{api, config::ServerConfig};

const HELP: &str = "\
Run a simulated live poker tables server

USAGE:
  lp_server [OPTIONS]

OPTIONS:
  --bind       IP:PORT     Server socket bind address       [default: env SERVER_BIND or 127.0.0.1:3000]
  --tables     N           Simulated tables to seed         [default: env NUM_TABLES or 10]
  --tick-secs  SECS        Seconds between dealing ticks    [default: env TICK_INTERVAL_SECS or 10]

FLAGS:
  -h, --help               Print help information

ENVIRONMENT:
  SERVER_BIND              Server bind address (e.g., 0.0.0.0:8080)
  NUM_TABLES               Number of simulated tables seeded at startup
  TICK_INTERVAL_SECS       Seconds between dealing ticks
";

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let config = ServerConfig::from_env(
        pargs.opt_value_from_str("--bind")?,
        pargs.opt_value_from_str("--tables")?,
        pargs.opt_value_from_str("--tick-secs")?,
    )?;

    // Catching signals for exit.
    set_handler(|| std::process::exit(0))?;

    env_logger::builder().format_target(false).init();
    info!("Starting live tables server at {}", config.bind);

    let registry = Arc::new(TableRegistry::new());
    let seeded = registry.seed_tables(config.num_tables).await;
    info!("Seeded {seeded} simulated table(s)");

    for summary in registry.list_tables().await {
        info!("  - {} (ID: {})", summary.name, summary.id);
    }

    Scheduler::new(registry.clone(), config.tick_interval).spawn();
    info!(
        "Scheduler running, dealing every {}s",
        config.tick_interval.as_secs()
    );

    let app = api::create_router(api::AppState { registry });

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to {}: {}", config.bind, e))?;

    info!(
        "Server is running at http://{}. Press Ctrl+C to stop.",
        config.bind
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    info!("Shutting down server...");

    Ok(())
}

/// Graceful shutdown signal
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install CTRL+C signal handler");
}
