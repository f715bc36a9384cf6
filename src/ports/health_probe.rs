//! Health Probe Port - Smoke Scenario Request Interface
//!
//! The health endpoint implementation is an external collaborator;
//! the smoke scenario reaches it only through this trait.

use async_trait::async_trait;

/// Trait for issuing one liveness request against the health endpoint.
///
/// Implementors must issue exactly one request per call — no retries,
/// no backoff — so the runner's "one request per iteration per VU"
/// accounting stays exact.
#[async_trait]
pub trait HealthProbe: Send + Sync + 'static {
  /// Issue one `GET` against the health endpoint.
  ///
  /// Returns the HTTP status code of the response; the body is
  /// ignored by all callers.
  ///
  /// # Errors
  /// Returns an error only when no response was received at all
  /// (connection refused, timeout). The scenario maps that to a
  /// failed check rather than propagating it.
  async fn probe_health(&self) -> anyhow::Result<u16>;
}
