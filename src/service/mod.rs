//! Validation run before any write is staged.

mod validation;
pub use validation::validate_supplier;
