//! Configuration Loader - File Loading and Validation
//!
//! Handles loading `config.toml`, validating all parameters,
//! and providing clear error messages for misconfiguration.

use std::path::Path;

use anyhow::{Context, Result};

use super::AppConfig;

/// Load and validate configuration from a TOML file.
///
/// # Errors
/// Returns detailed error if:
/// - File doesn't exist or can't be read
/// - TOML parsing fails
/// - Validation rules are violated
pub fn load_config(path: &str) -> Result<AppConfig> {
  let path = Path::new(path);

  let content = std::fs::read_to_string(path)
    .with_context(|| format!("Failed to read config file: {}", path.display()))?;

  let config: AppConfig = toml::from_str(&content)
    .with_context(|| "Failed to parse config.toml")?;

  validate_config(&config)?;

  Ok(config)
}

/// Validate all configuration parameters.
fn validate_config(config: &AppConfig) -> Result<()> {
  anyhow::ensure!(
    !config.endpoints.base_url.is_empty(),
    "endpoints.base_url must not be empty"
  );
  anyhow::ensure!(
    !config.endpoints.base_url.ends_with('/'),
    "endpoints.base_url must not end with '/', got {}",
    config.endpoints.base_url
  );
  anyhow::ensure!(
    config.endpoints.metrics_path.starts_with('/'),
    "endpoints.metrics_path must start with '/', got {}",
    config.endpoints.metrics_path
  );
  anyhow::ensure!(
    config.endpoints.health_path.starts_with('/'),
    "endpoints.health_path must start with '/', got {}",
    config.endpoints.health_path
  );
  anyhow::ensure!(
    config.endpoints.timeout_seconds > 0,
    "endpoints.timeout_seconds must be positive"
  );

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_load_nonexistent_file() {
    let result = load_config("nonexistent.toml");
    assert!(result.is_err());
  }

  #[test]
  fn test_parse_minimal_config() {
    let config: AppConfig = toml::from_str(
      r#"
      [run]
      mode = "smoke"

      [endpoints]
      base_url = "http://localhost:8080"
      "#,
    )
    .unwrap();

    assert_eq!(config.run.mode, super::super::RunMode::Smoke);
    assert_eq!(config.run.log_level, "info");
    assert_eq!(config.endpoints.metrics_path, "/metrics");
    assert_eq!(config.endpoints.health_path, "/health");
    assert_eq!(config.endpoints.timeout_seconds, 30);
    assert!(validate_config(&config).is_ok());
  }

  #[test]
  fn test_trailing_slash_rejected() {
    let config: AppConfig = toml::from_str(
      r#"
      [run]
      mode = "dashboard"

      [endpoints]
      base_url = "http://localhost:8080/"
      "#,
    )
    .unwrap();

    assert!(validate_config(&config).is_err());
  }
}
