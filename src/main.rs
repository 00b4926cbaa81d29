//! Dealership API server.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ─────────────▶ trace / request-id / timeout / body limit / metrics
//!                        │
//!                        ▼
//!                 ┌──────────────┐      ┌─────────────────────────────┐
//!                 │   router     │─────▶│ handlers (dealerships, cars)│
//!                 └──────────────┘      └──────────────┬──────────────┘
//!                                                      │ RwLock
//!                                                      ▼
//!                                         ┌──────────────────────────┐
//!                                         │ Store                    │
//!                                         │  Vec<Dealership>         │
//!                                         │    └─ Vec<Car>           │
//!                                         └──────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use dealership_api::config::load_config;
use dealership_api::lifecycle::startup;
use dealership_api::observability::logging;

#[derive(Parser)]
#[command(name = "dealership-api")]
#[command(about = "In-memory dealership and car CRUD service", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;

    logging::init(&config.observability.log_level);

    tracing::info!("dealership-api v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address(),
        seed = config.store.seed,
        request_timeout_secs = config.timeouts.request_secs,
        metrics_enabled = config.observability.metrics_enabled,
        "Configuration loaded"
    );

    startup::run(config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
