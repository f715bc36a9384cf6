//! Property-Based Tests — Domain Layer Invariants
//!
//! Uses `proptest` to verify the check predicate and snapshot
//! rendering across random inputs.

use proptest::prelude::*;

use deploywatch::domain::{Check, MetricsSnapshot};

proptest! {
    /// The health check passes for status 200 and nothing else.
    #[test]
    fn health_check_passes_only_on_200(status in 0u16..1000) {
        let check = Check::health(status);
        prop_assert_eq!(check.passed, status == 200);
        prop_assert_eq!(check.name, "health ok");
    }

    /// A loaded snapshot always renders, whatever the payload shape.
    #[test]
    fn loaded_snapshot_always_renders(
        count in any::<i64>(),
        label in ".{0,40}",
    ) {
        let mut snapshot = MetricsSnapshot::new();
        snapshot.load(serde_json::json!({"count": count, "label": label}));
        prop_assert!(snapshot.render().is_some());
    }

    /// Pretty-printing never alters payload content.
    #[test]
    fn render_preserves_payload(
        count in any::<i64>(),
        rate in -1.0e6f64..1.0e6,
    ) {
        let payload = serde_json::json!({"count": count, "rate": rate});
        let mut snapshot = MetricsSnapshot::new();
        snapshot.load(payload.clone());

        let rendered = snapshot.render().unwrap();
        let reparsed: serde_json::Value =
            serde_json::from_str(&rendered).unwrap();
        prop_assert_eq!(reparsed, payload);
    }
}
