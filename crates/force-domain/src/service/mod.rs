//! Domain services

pub mod force_validator;
pub mod report;

pub use force_validator::{validate_force, HANDICAP_FACTOR};
pub use report::generate_report;
