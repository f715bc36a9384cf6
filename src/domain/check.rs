//! Health Check - Smoke Scenario Predicate
//!
//! One named boolean assertion evaluated once per load-test iteration
//! and handed to the runner's aggregation layer. Pass is defined
//! strictly as HTTP status 200; the response body is ignored.

/// Name of the single check reported by the smoke scenario.
pub const HEALTH_CHECK_NAME: &str = "health ok";

/// Outcome of one check evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Check {
    /// Check name as aggregated by the runner.
    pub name: &'static str,
    /// Whether the assertion held for this iteration.
    pub passed: bool,
}

impl Check {
    /// Evaluate the health assertion against a response status code.
    ///
    /// Any status other than 200 fails, including other 2xx codes.
    /// A transport failure that produced no response is reported by
    /// the caller as status 0 and therefore also fails.
    pub fn health(status: u16) -> Self {
        Self {
            name: HEALTH_CHECK_NAME,
            passed: status == 200,
        }
    }
}
