//! Use Cases Layer - Application Logic
//!
//! Orchestrates domain logic with port interfaces. Each use case is a
//! self-contained unit with no knowledge of the other.
//!
//! Use cases:
//! - `Dashboard`: fetch one metrics snapshot per mount and render it
//! - `SmokeScenario`: one health request + one check per iteration

pub mod dashboard;
pub mod smoke;
