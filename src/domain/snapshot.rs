//! Metrics Snapshot - Dashboard View State
//!
//! The dashboard has exactly two observable states: no data, or one
//! loaded payload. Modeled as an explicit tagged value rather than a
//! nullable field so that render logic stays exhaustive. The payload
//! is an arbitrary JSON value; no schema is assumed or enforced.

use serde_json::Value;

/// Latest metrics payload held by the dashboard view.
///
/// The only transition is `Empty → Loaded`, triggered by a completed
/// fetch. A later fetch replaces the payload in place; nothing ever
/// transitions back to `Empty`.
#[derive(Debug, Clone, PartialEq)]
pub enum MetricsSnapshot {
    /// No payload fetched yet (also the state after a failed fetch).
    Empty,
    /// One metrics payload of unconstrained shape.
    Loaded(Value),
}

impl MetricsSnapshot {
    /// Initial view state.
    pub fn new() -> Self {
        Self::Empty
    }

    /// Store a fetched payload, replacing any previous one.
    pub fn load(&mut self, payload: Value) {
        *self = Self::Loaded(payload);
    }

    /// Whether a payload is present.
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    /// Pretty-print the payload with two-space indentation.
    ///
    /// Returns `None` while empty. Serializing a `serde_json::Value`
    /// cannot fail (map keys are always strings), so `Loaded` always
    /// yields `Some`.
    pub fn render(&self) -> Option<String> {
        match self {
            Self::Empty => None,
            Self::Loaded(payload) => serde_json::to_string_pretty(payload).ok(),
        }
    }
}

impl Default for MetricsSnapshot {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_renders_nothing() {
        let snapshot = MetricsSnapshot::new();
        assert!(!snapshot.is_loaded());
        assert_eq!(snapshot.render(), None);
    }

    #[test]
    fn test_pretty_print_uses_two_space_indent() {
        let mut snapshot = MetricsSnapshot::new();
        snapshot.load(json!({"a": 1}));
        assert_eq!(snapshot.render().as_deref(), Some("{\n  \"a\": 1\n}"));
    }

    #[test]
    fn test_load_replaces_previous_payload() {
        let mut snapshot = MetricsSnapshot::new();
        snapshot.load(json!({"version": "v1"}));
        snapshot.load(json!({"version": "v2"}));
        assert_eq!(snapshot, MetricsSnapshot::Loaded(json!({"version": "v2"})));
    }

    #[test]
    fn test_any_json_shape_is_accepted() {
        let mut snapshot = MetricsSnapshot::new();
        snapshot.load(json!([1, null, {"nested": true}]));
        assert!(snapshot.render().is_some());
    }
}
