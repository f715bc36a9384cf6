//! Metrics Source Port - Dashboard Data Interface
//!
//! The metrics-producing backend is an external collaborator; the
//! dashboard reaches it only through this trait.

use async_trait::async_trait;
use serde_json::Value;

/// Trait for providers of the dashboard's metrics payload.
///
/// One call fetches one snapshot. Implementors must not retry: the
/// dashboard contract is exactly one request per mount, and failure
/// semantics (silent no-data) depend on the call failing at most once.
#[async_trait]
pub trait MetricsSource: Send + Sync + 'static {
  /// Fetch the current metrics payload.
  ///
  /// # Errors
  /// Returns an error on transport failure or a non-JSON body. The
  /// payload shape is otherwise unconstrained.
  async fn fetch_metrics(&self) -> anyhow::Result<Value>;
}
