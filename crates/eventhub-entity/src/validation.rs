//! Field-level validation results shared by all entity validators.
//!
//! Each validator consumes a raw input struct and produces either the
//! accepted value or an ordered list of [`FieldViolation`]s. The HTTP
//! layer reports the first violation's message.

use eventhub_core::error::AppError;

/// A single field-level validation violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// The offending field, in wire-format spelling.
    pub field: &'static str,
    /// Human-readable message naming the field.
    pub message: String,
}

impl FieldViolation {
    /// Create a new violation for the given field.
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    /// A "field is required" violation.
    pub fn required(field: &'static str) -> Self {
        Self::new(field, format!("\"{field}\" is required"))
    }
}

/// Convert an ordered violation list into the first-failure `AppError`.
pub fn first_violation(violations: Vec<FieldViolation>) -> AppError {
    let message = violations
        .into_iter()
        .next()
        .map(|v| v.message)
        .unwrap_or_else(|| "Validation failed".to_string());
    AppError::validation(message)
}

/// Check a trimmed string value against length bounds.
///
/// Returns a violation when the value is shorter than `min` or longer
/// than `max`. An empty value violates the minimum bound even when the
/// field itself is optional.
pub fn check_length(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Option<FieldViolation> {
    let len = value.chars().count();
    if len < min {
        Some(FieldViolation::new(
            field,
            format!("\"{field}\" must be at least {min} characters"),
        ))
    } else if len > max {
        Some(FieldViolation::new(
            field,
            format!("\"{field}\" cannot exceed {max} characters"),
        ))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_names_field() {
        let v = FieldViolation::required("email");
        assert!(v.message.contains("email"));
    }

    #[test]
    fn test_check_length_bounds() {
        assert!(check_length("title", "short", 6, 200).is_some());
        assert!(check_length("title", "long enough", 6, 200).is_none());
        assert!(check_length("title", &"x".repeat(201), 6, 200).is_some());
        // present-but-empty violates the minimum bound
        assert!(check_length("title", "", 6, 200).is_some());
    }

    #[test]
    fn test_first_violation_takes_first() {
        let err = first_violation(vec![
            FieldViolation::required("email"),
            FieldViolation::required("password"),
        ]);
        assert!(err.message.contains("email"));
    }
}
