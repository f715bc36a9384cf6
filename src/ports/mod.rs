//! Ports Layer - Hexagonal Architecture Boundaries
//!
//! Defines the interfaces (traits) that the usecases layer requires
//! from the outside world. Adapters implement these traits.
//!
//! Port categories:
//! - `MetricsSource`: the dashboard's single boundary call
//! - `HealthProbe`: the smoke scenario's single boundary call
//! - `CheckSink` / `ScenarioOptions`: the external load-generation
//!   runner that owns scheduling and check aggregation

pub mod health_probe;
pub mod metrics_source;
pub mod runner;
