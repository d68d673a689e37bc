//! Handicap-weighted tonnage check for mixed forces

use crate::model::ValidationResult;

/// Weight applied to every primary (Clan) ton.
///
/// Kept at 1.33 although the house rule is usually quoted as a 25% handicap.
pub const HANDICAP_FACTOR: f64 = 1.33;

/// Check a primary/secondary tonnage split against `base_limit`.
///
/// A force whose effective cap equals the limit exactly is still valid.
/// Inputs are not range-checked.
pub fn validate_force(primary_tonnage: f64, secondary_tonnage: f64, base_limit: f64) -> ValidationResult {
    let weighted_primary = primary_tonnage * HANDICAP_FACTOR;
    let effective_cap = weighted_primary + secondary_tonnage;
    let is_valid = effective_cap <= base_limit;

    let remaining_tonnage = if is_valid { base_limit - effective_cap } else { 0.0 };
    let (unused_primary_tonnage, unused_secondary_tonnage) = if remaining_tonnage > 0.0 {
        (remaining_tonnage / HANDICAP_FACTOR, remaining_tonnage)
    } else {
        (0.0, 0.0)
    };

    tracing::debug!(
        primary_tonnage,
        secondary_tonnage,
        base_limit,
        effective_cap,
        is_valid,
        "validated force composition"
    );

    ValidationResult {
        effective_cap,
        is_valid,
        remaining_tonnage,
        unused_primary_tonnage,
        unused_secondary_tonnage,
    }
}
