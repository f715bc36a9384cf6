//! Runner Port - External Load-Generation Collaborator
//!
//! Virtual-user scheduling, iteration pacing, and check aggregation
//! belong to an external load-generation runner, not to the scenario
//! body. The scenario only needs two things from it: a place to report
//! check outcomes, and a static options block describing how the
//! runner should drive the scenario.

use std::time::Duration;

use crate::domain::Check;

/// Aggregation layer of the load-generation runner.
///
/// Receives exactly one check outcome per scenario iteration. A failed
/// check is an ordinary recorded result, never an error: recording
/// must not abort the run.
pub trait CheckSink: Send + Sync {
  /// Record one check outcome.
  fn record(&self, check: Check);
}

/// Static scenario options consumed by the runner, not by the
/// scenario body itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScenarioOptions {
  /// Number of concurrent virtual users.
  pub virtual_users: u32,
  /// Total wall-clock duration of the run.
  pub duration: Duration,
}
