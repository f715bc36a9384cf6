//! Domain layer - Core view and check logic.
//!
//! Pure logic for the two fragments: the dashboard's metrics snapshot
//! and the smoke scenario's health check predicate. No external
//! dependencies beyond serde_json (hexagonal architecture inner ring).

pub mod check;
pub mod snapshot;

// Re-export core types for convenience
pub use check::{Check, HEALTH_CHECK_NAME};
pub use snapshot::MetricsSnapshot;
