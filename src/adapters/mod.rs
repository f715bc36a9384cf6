//! Adapters Layer - Hexagonal Architecture Outer Ring
//!
//! Implements the port traits defined in `crate::ports` with concrete
//! external dependencies.
//!
//! Adapter categories:
//! - `http`: reqwest client for the metrics and health endpoints
//! - `runner`: in-process stand-in for the external load runner

pub mod http;
pub mod runner;
