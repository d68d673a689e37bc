use serde::{Deserialize, Serialize};

/// Outcome of checking a force composition against its base limit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Handicap-weighted total of both groups
    pub effective_cap: f64,
    pub is_valid: bool,
    /// Headroom under the base limit; zero when invalid
    pub remaining_tonnage: f64,
    /// Headroom expressed in primary (Clan) tons
    pub unused_primary_tonnage: f64,
    /// Headroom expressed in secondary (Inner Sphere) tons
    pub unused_secondary_tonnage: f64,
}

impl ValidationResult {
    pub fn status_label(&self) -> &'static str {
        if self.is_valid {
            "VALID"
        } else {
            "INVALID"
        }
    }
}
