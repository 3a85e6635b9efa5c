//! Field validation for write payloads.

use crate::error::{AppError, ValidationErrors};
use crate::model::{Supplier, DOCUMENT_MAX_CHARS, NAME_MAX_CHARS};

/// Check every field rule and collect all violations, keyed by field name.
/// Runs before any mutation is staged; a failure never reaches the store.
pub fn validate_supplier(supplier: &Supplier) -> Result<(), AppError> {
    let mut errors = ValidationErrors::new();
    check_text_field("name", &supplier.name, NAME_MAX_CHARS, &mut errors);
    check_text_field("document", &supplier.document, DOCUMENT_MAX_CHARS, &mut errors);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(errors))
    }
}

/// Required, non-blank, at most `max_chars` characters.
fn check_text_field(field: &str, value: &str, max_chars: usize, errors: &mut ValidationErrors) {
    let mut messages = Vec::new();
    if value.trim().is_empty() {
        messages.push(format!("{} is required", field));
    } else if value.chars().count() > max_chars {
        messages.push(format!("{} must be at most {} characters", field, max_chars));
    }
    if !messages.is_empty() {
        errors.insert(field.to_string(), messages);
    }
}
