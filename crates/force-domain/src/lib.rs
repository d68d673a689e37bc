//! Domain models and services for mixed force validation

pub mod model;
pub mod service;

pub use model::{ForceComposition, ValidationResult};
pub use service::{generate_report, validate_force, HANDICAP_FACTOR};
