//! Local Runner - In-process Load-Generation Stand-in
//!
//! A minimal implementation of the external load-generation runner's
//! responsibilities: spawn the configured virtual users, drive the
//! scenario body in a loop until the duration elapses, and aggregate
//! check outcomes. The scenario body stays runner-agnostic; nothing
//! here leaks into the usecases layer.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::time::Instant;
use tracing::{debug, info};

use crate::domain::Check;
use crate::ports::health_probe::HealthProbe;
use crate::ports::runner::{CheckSink, ScenarioOptions};
use crate::usecases::smoke::SmokeScenario;

/// Lock-free check aggregator shared across virtual users.
#[derive(Debug, Default)]
pub struct CheckTally {
  /// Checks that passed.
  passed: AtomicU64,
  /// Checks that failed.
  failed: AtomicU64,
}

impl CheckTally {
  /// Number of passing checks recorded so far.
  pub fn passed(&self) -> u64 {
    self.passed.load(Ordering::Relaxed)
  }

  /// Number of failing checks recorded so far.
  pub fn failed(&self) -> u64 {
    self.failed.load(Ordering::Relaxed)
  }
}

impl CheckSink for CheckTally {
  fn record(&self, check: Check) {
    if check.passed {
      self.passed.fetch_add(1, Ordering::Relaxed);
    } else {
      self.failed.fetch_add(1, Ordering::Relaxed);
    }
  }
}

/// Aggregated result of one scenario run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
  /// Total iterations executed across all virtual users.
  pub iterations: u64,
  /// Checks that passed.
  pub passed: u64,
  /// Checks that failed.
  pub failed: u64,
}

/// Drive a smoke scenario to completion per its options.
///
/// Each virtual user loops the scenario body back-to-back until the
/// deadline; a failed check never stops the loop. Returns once every
/// virtual user has finished its in-flight iteration.
pub async fn run<P: HealthProbe>(
  scenario: SmokeScenario<P>,
  options: ScenarioOptions,
) -> RunSummary {
  let scenario = Arc::new(scenario);
  let tally = Arc::new(CheckTally::default());
  let deadline = Instant::now() + options.duration;

  info!(
    virtual_users = options.virtual_users,
    duration_secs = options.duration.as_secs(),
    "Smoke run starting"
  );

  let mut handles = Vec::with_capacity(options.virtual_users as usize);
  for vu in 0..options.virtual_users {
    let scenario = Arc::clone(&scenario);
    let tally = Arc::clone(&tally);
    handles.push(tokio::spawn(async move {
      let mut iterations = 0u64;
      while Instant::now() < deadline {
        scenario.iteration(tally.as_ref()).await;
        iterations += 1;
      }
      debug!(vu, iterations, "virtual user finished");
      iterations
    }));
  }

  let mut iterations = 0u64;
  for handle in handles {
    iterations += handle.await.unwrap_or(0);
  }

  let summary = RunSummary {
    iterations,
    passed: tally.passed(),
    failed: tally.failed(),
  };

  info!(
    iterations = summary.iterations,
    passed = summary.passed,
    failed = summary.failed,
    "Smoke run complete"
  );

  summary
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_tally_counts_both_outcomes() {
    let tally = CheckTally::default();
    tally.record(Check::health(200));
    tally.record(Check::health(200));
    tally.record(Check::health(503));
    assert_eq!(tally.passed(), 2);
    assert_eq!(tally.failed(), 1);
  }
}
