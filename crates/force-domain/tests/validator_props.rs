//! Property-based tests for the force validator

use force_domain::{validate_force, ForceComposition, HANDICAP_FACTOR};
use proptest::prelude::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

proptest! {
    #[test]
    fn effective_cap_is_weighted_sum(
        primary in 0.0f64..10_000.0,
        secondary in 0.0f64..10_000.0,
        limit in 0.0f64..20_000.0,
    ) {
        let result = validate_force(primary, secondary, limit);
        prop_assert_eq!(result.effective_cap, primary * HANDICAP_FACTOR + secondary);
    }

    #[test]
    fn validity_matches_limit(
        primary in 0.0f64..10_000.0,
        secondary in 0.0f64..10_000.0,
        limit in 0.0f64..20_000.0,
    ) {
        let result = validate_force(primary, secondary, limit);
        prop_assert_eq!(result.is_valid, result.effective_cap <= limit);
    }

    #[test]
    fn invalid_force_has_no_headroom(
        primary in 0.0f64..10_000.0,
        secondary in 0.0f64..10_000.0,
        limit in 0.0f64..20_000.0,
    ) {
        let result = validate_force(primary, secondary, limit);
        if !result.is_valid {
            prop_assert_eq!(result.remaining_tonnage, 0.0);
            prop_assert_eq!(result.unused_primary_tonnage, 0.0);
            prop_assert_eq!(result.unused_secondary_tonnage, 0.0);
        }
    }

    #[test]
    fn unused_tonnage_converts_back_to_remaining(
        primary in 0.0f64..10_000.0,
        secondary in 0.0f64..10_000.0,
        limit in 0.0f64..20_000.0,
    ) {
        let result = validate_force(primary, secondary, limit);
        if result.is_valid {
            prop_assert!(result.remaining_tonnage >= 0.0);
            prop_assert!(close(result.unused_primary_tonnage * HANDICAP_FACTOR, result.remaining_tonnage));
            prop_assert_eq!(result.unused_secondary_tonnage, result.remaining_tonnage);
        }
    }

    #[test]
    fn composition_validate_matches_free_function(
        primary in 0.0f64..10_000.0,
        secondary in 0.0f64..10_000.0,
        limit in 0.0f64..20_000.0,
    ) {
        let composition = ForceComposition::new(primary, secondary, limit);
        prop_assert_eq!(composition.validate(), validate_force(primary, secondary, limit));
    }
}

#[test]
fn equal_to_limit_is_valid() {
    for limit in [0.0, 1.0, 250.0, 400.0] {
        let result = validate_force(0.0, limit, limit);
        assert!(result.is_valid, "limit {limit} should be reachable exactly");
        assert_eq!(result.remaining_tonnage, 0.0);
    }
}
