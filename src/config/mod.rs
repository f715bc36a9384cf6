//! Configuration Module - TOML-based Runtime Configuration
//!
//! Loads and validates configuration from `config.toml`. Endpoint
//! locations and the run mode are externalized here; the smoke
//! scenario's virtual-user count and duration are fixed scenario
//! options and deliberately have no config surface.

pub mod loader;

use serde::Deserialize;

/// Top-level configuration.
///
/// Loaded from `config.toml` at startup and validated before any
/// request is issued.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
  /// Run mode and logging.
  pub run: RunConfig,
  /// Target endpoint locations.
  pub endpoints: EndpointsConfig,
}

/// Which component the binary runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
  /// Render one metrics snapshot.
  Dashboard,
  /// Run the health smoke scenario.
  Smoke,
}

/// Run configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RunConfig {
  /// Component to run.
  pub mode: RunMode,
  /// Log level (trace, debug, info, warn, error).
  #[serde(default = "default_log_level")]
  pub log_level: String,
}

/// Endpoint configuration for the deployment under observation.
#[derive(Debug, Clone, Deserialize)]
pub struct EndpointsConfig {
  /// Base URL, scheme and authority only.
  pub base_url: String,
  /// Metrics endpoint path.
  #[serde(default = "default_metrics_path")]
  pub metrics_path: String,
  /// Health endpoint path.
  #[serde(default = "default_health_path")]
  pub health_path: String,
  /// Request timeout in seconds.
  #[serde(default = "default_timeout")]
  pub timeout_seconds: u64,
}

// Default value functions for serde

fn default_log_level() -> String {
  "info".to_string()
}

fn default_metrics_path() -> String {
  "/metrics".to_string()
}

fn default_health_path() -> String {
  "/health".to_string()
}

fn default_timeout() -> u64 {
  30
}
