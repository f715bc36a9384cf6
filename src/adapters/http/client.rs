//! Endpoint HTTP Client - Plain GET Client
//!
//! Wraps reqwest for the two boundary calls. Deliberately no retry
//! loop and no backoff: both consumers require exactly one request
//! per call, so transient failures surface immediately to the caller.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::ports::health_probe::HealthProbe;
use crate::ports::metrics_source::MetricsSource;

/// Configuration for the endpoint client.
#[derive(Debug, Clone)]
pub struct EndpointClientConfig {
  /// Base URL of the deployment under observation.
  pub base_url: String,
  /// Path of the metrics endpoint.
  pub metrics_path: String,
  /// Path of the health endpoint.
  pub health_path: String,
  /// Request timeout.
  pub timeout: Duration,
}

impl Default for EndpointClientConfig {
  fn default() -> Self {
    Self {
      base_url: "http://localhost:8080".to_string(),
      metrics_path: "/metrics".to_string(),
      health_path: "/health".to_string(),
      timeout: Duration::from_secs(30),
    }
  }
}

/// Failure to interpret a metrics response body.
#[derive(Debug, Error)]
pub enum PayloadError {
  /// Body was received but is not valid JSON.
  #[error("metrics body is not valid JSON: {0}")]
  Malformed(#[from] serde_json::Error),
}

/// Decode a metrics response body into an unconstrained JSON value.
///
/// Kept separate from the transport so malformed-body handling is
/// testable without a socket.
pub fn decode_payload(body: &str) -> std::result::Result<Value, PayloadError> {
  Ok(serde_json::from_str(body)?)
}

/// HTTP client for the metrics and health endpoints.
pub struct EndpointClient {
  /// Underlying HTTP client.
  http: Client,
  /// Client configuration.
  config: EndpointClientConfig,
}

impl EndpointClient {
  /// Create a new endpoint client.
  pub fn new(config: EndpointClientConfig) -> Result<Self> {
    let http = Client::builder()
      .timeout(config.timeout)
      .build()
      .context("Failed to build HTTP client")?;

    Ok(Self { http, config })
  }

  /// Execute a single GET request. One attempt, no retry.
  async fn get(&self, path: &str) -> Result<Response> {
    let url = format!("{}{}", self.config.base_url, path);
    debug!(url = %url, "GET");
    self
      .http
      .get(&url)
      .send()
      .await
      .with_context(|| format!("GET {url} failed"))
  }
}

#[async_trait]
impl MetricsSource for EndpointClient {
  /// Fetch and decode the metrics payload.
  ///
  /// The status code is not inspected: whatever body comes back is
  /// parsed as JSON, matching the view's fetch-then-parse contract.
  async fn fetch_metrics(&self) -> Result<Value> {
    let response = self.get(&self.config.metrics_path).await?;
    let body = response
      .text()
      .await
      .context("Failed to read metrics body")?;
    let payload = decode_payload(&body)?;
    Ok(payload)
  }
}

#[async_trait]
impl HealthProbe for EndpointClient {
  /// Issue one GET against the health endpoint and return its status.
  async fn probe_health(&self) -> Result<u16> {
    let response = self.get(&self.config.health_path).await?;
    Ok(response.status().as_u16())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_decode_valid_payload() {
    let payload = decode_payload(r#"{"a":1}"#).unwrap();
    assert_eq!(payload["a"], 1);
  }

  #[test]
  fn test_decode_malformed_payload() {
    let result = decode_payload("total_requests: 12");
    assert!(matches!(result, Err(PayloadError::Malformed(_))));
  }

  #[test]
  fn test_decode_accepts_any_json_shape() {
    assert!(decode_payload("[]").is_ok());
    assert!(decode_payload("null").is_ok());
    assert!(decode_payload("42").is_ok());
  }

  #[test]
  fn test_client_builds_with_defaults() {
    let client = EndpointClient::new(EndpointClientConfig::default());
    assert!(client.is_ok());
  }
}
