use serde::{Deserialize, Serialize};

use crate::model::ValidationResult;
use crate::service::validate_force;

/// A mixed force submitted for validation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForceComposition {
    pub primary_tonnage: f64,   // Clan
    pub secondary_tonnage: f64, // Inner Sphere
    pub base_limit: f64,
}

impl ForceComposition {
    pub fn new(primary_tonnage: f64, secondary_tonnage: f64, base_limit: f64) -> Self {
        Self {
            primary_tonnage,
            secondary_tonnage,
            base_limit,
        }
    }

    pub fn validate(&self) -> ValidationResult {
        validate_force(self.primary_tonnage, self.secondary_tonnage, self.base_limit)
    }
}
