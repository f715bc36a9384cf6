//! Smoke Scenario - Health Endpoint Liveness Assertion
//!
//! The scenario body the load-generation runner executes once per
//! iteration: issue one `GET` against the health endpoint, evaluate the
//! single "health ok" check (status == 200), report the outcome to
//! the runner's aggregation layer. The body is stateless across
//! iterations and never fails — a transport error becomes a failed
//! check so the remaining iterations still run.

use std::time::Duration;

use tracing::debug;

use crate::domain::Check;
use crate::ports::health_probe::HealthProbe;
use crate::ports::runner::{CheckSink, ScenarioOptions};

/// Fixed virtual-user count handed to the runner.
const VIRTUAL_USERS: u32 = 1;

/// Fixed run duration handed to the runner.
const DURATION: Duration = Duration::from_secs(30);

/// Smoke-test scenario over a `HealthProbe`.
pub struct SmokeScenario<P> {
  /// Boundary to the external health endpoint.
  probe: P,
}

/// Static options consumed by the runner. The scenario body never
/// reads these; scheduling is entirely the runner's concern.
pub fn options() -> ScenarioOptions {
  ScenarioOptions {
    virtual_users: VIRTUAL_USERS,
    duration: DURATION,
  }
}

impl<P: HealthProbe> SmokeScenario<P> {
  /// Create the scenario around a probe.
  pub fn new(probe: P) -> Self {
    Self { probe }
  }

  /// Run one iteration: one request, one check, one record.
  ///
  /// A probe error (no response at all) is evaluated as status 0,
  /// which fails the check without aborting the run.
  pub async fn iteration(&self, sink: &dyn CheckSink) {
    let status = match self.probe.probe_health().await {
      Ok(status) => status,
      Err(error) => {
        debug!(error = %error, "health probe got no response");
        0
      }
    };
    sink.record(Check::health(status));
  }
}
