//! deploywatch — Entry Point
//!
//! Initializes configuration and logging, builds the endpoint client,
//! and runs the component selected by `run.mode`.
//!
//! Wiring sequence:
//! 1. Load config.toml + validate
//! 2. Init tracing (JSON structured logging)
//! 3. Create EndpointClient (plain GET, single attempt)
//! 4. Dashboard mode: mount the view once, print the render
//! 5. Smoke mode: hand the scenario + fixed options to the runner,
//!    log the aggregated tally

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use anyhow::{Context, Result};
use tracing::info;

mod adapters;
mod config;
mod domain;
mod ports;
mod usecases;

use adapters::http::{EndpointClient, EndpointClientConfig};
use adapters::runner;
use config::RunMode;
use usecases::dashboard::Dashboard;
use usecases::smoke::{self, SmokeScenario};

#[tokio::main]
async fn main() -> Result<()> {
    // ── 1. Load configuration from config.toml ──────────────
    let config = config::loader::load_config("config.toml")
        .context("Failed to load configuration")?;

    // ── 2. Initialize structured JSON logging ───────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new(&config.run.log_level)
                }),
        )
        .json()
        .init();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        mode = ?config.run.mode,
        base_url = %config.endpoints.base_url,
        "Starting deploywatch"
    );

    // ── 3. Create the endpoint client ───────────────────────
    let client = EndpointClient::new(EndpointClientConfig {
        base_url: config.endpoints.base_url.clone(),
        metrics_path: config.endpoints.metrics_path.clone(),
        health_path: config.endpoints.health_path.clone(),
        timeout: std::time::Duration::from_secs(config.endpoints.timeout_seconds),
    })
    .context("Failed to create endpoint client")?;

    match config.run.mode {
        // ── 4. Dashboard: one mount, one render ─────────────
        RunMode::Dashboard => {
            let mut dashboard = Dashboard::new(client);
            dashboard.mount().await;
            println!("{}", dashboard.render());
        }
        // ── 5. Smoke: fixed options, runner owns scheduling ─
        RunMode::Smoke => {
            let scenario = SmokeScenario::new(client);
            let summary = runner::run(scenario, smoke::options()).await;
            println!(
                "checks: {} passed, {} failed ({} iterations)",
                summary.passed, summary.failed, summary.iterations
            );
        }
    }

    Ok(())
}
