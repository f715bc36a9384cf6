//! HTTP Adapters - Endpoint Client
//!
//! One reqwest-backed client serves both ports: it is the dashboard's
//! `MetricsSource` and the smoke scenario's `HealthProbe`.

pub mod client;

pub use client::{decode_payload, EndpointClient, EndpointClientConfig, PayloadError};
