//! Domain model types

pub mod composition;
pub mod validation_result;

pub use composition::ForceComposition;
pub use validation_result::ValidationResult;
