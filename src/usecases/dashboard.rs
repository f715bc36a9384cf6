//! Dashboard - Latest Metrics Snapshot View
//!
//! Displays the most recent metrics payload. On mount the view issues
//! exactly one fetch through the `MetricsSource` port — no retry, no
//! cancellation, no debounce. A failed or malformed fetch leaves the
//! view in its "no data" state with no distinguishable error state;
//! the failure is traced for operators but never rendered. Surfacing
//! it as a third view state was considered and rejected to keep the
//! observable behavior of the original view.

use tracing::debug;

use crate::domain::MetricsSnapshot;
use crate::ports::metrics_source::MetricsSource;

/// Heading rendered above the payload block.
const HEADING: &str = "Deployment Dashboard";

/// Metrics dashboard view over a `MetricsSource`.
pub struct Dashboard<S> {
  /// Boundary to the external metrics service.
  source: S,
  /// Current view state.
  snapshot: MetricsSnapshot,
}

impl<S: MetricsSource> Dashboard<S> {
  /// Create an unmounted view with no payload.
  pub fn new(source: S) -> Self {
    Self {
      source,
      snapshot: MetricsSnapshot::new(),
    }
  }

  /// Mount the view: issue one fetch and store the result.
  ///
  /// Infallible by contract — a failed fetch is swallowed and the
  /// view stays on "no data". Mounting again issues a fresh fetch
  /// and replaces the payload on success.
  pub async fn mount(&mut self) {
    match self.source.fetch_metrics().await {
      Ok(payload) => self.snapshot.load(payload),
      Err(error) => {
        debug!(error = %error, "metrics fetch failed, view stays empty");
      }
    }
  }

  /// Render the view: heading, plus the pretty-printed payload when
  /// one is loaded.
  pub fn render(&self) -> String {
    let mut out = String::from(HEADING);
    out.push('\n');
    if let Some(payload) = self.snapshot.render() {
      out.push('\n');
      out.push_str(&payload);
      out.push('\n');
    }
    out
  }

  /// Current view state.
  pub fn snapshot(&self) -> &MetricsSnapshot {
    &self.snapshot
  }
}
