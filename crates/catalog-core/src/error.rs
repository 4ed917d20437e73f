//! # Error Types
//!
//! Domain-specific error types for catalog-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  catalog-core errors (this file)                                       │
//! │  ├── ValidationError   - A single field failing a rule                 │
//! │  └── ValidationErrors  - Every failing field of one submission         │
//! │                                                                         │
//! │  catalog-db errors (separate crate)                                    │
//! │  └── DbError           - Database operation failures                   │
//! │                                                                         │
//! │  admin-api errors (in app)                                             │
//! │  └── ApiError          - What the client sees (serialized)             │
//! │                                                                         │
//! │  Flow: ValidationErrors → DbError → ApiError → Client                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, id, etc.)
//! 3. Errors are enum variants, never bare Strings
//! 4. Validation reports *every* failing field, not just the first

use serde::Serialize;
use thiserror::Error;
use ts_rs::TS;

// =============================================================================
// Validation Error
// =============================================================================

/// A single field failing a validation rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("The {field} field is required.")]
    Required { field: &'static str },

    /// Field value is too long.
    #[error("The {field} field must not be greater than {max} characters.")]
    TooLong { field: &'static str, max: usize },

    /// Value must parse as a number.
    #[error("The {field} field must be a number.")]
    NotNumeric { field: &'static str },
}

impl ValidationError {
    /// The name of the field this error is about.
    pub const fn field(&self) -> &'static str {
        match self {
            ValidationError::Required { field }
            | ValidationError::TooLong { field, .. }
            | ValidationError::NotNumeric { field } => field,
        }
    }
}

/// One failing field, shaped for the 422 response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Every failing field of one submission, in field order.
///
/// The client renders one message under each offending input, so the whole
/// collection is surfaced at once instead of failing fast on the first rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{} field(s) failed validation", .errors.len())]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates an empty collection.
    pub fn new() -> Self {
        ValidationErrors::default()
    }

    /// Records the outcome of one field check.
    pub fn check(&mut self, result: Result<(), ValidationError>) {
        if let Err(err) = result {
            self.errors.push(err);
        }
    }

    /// True when no field failed.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Consumes the collection, returning `Err` if any field failed.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// The failing fields in submission order.
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter()
    }

    /// Shapes the collection for the response body.
    pub fn field_errors(&self) -> Vec<FieldError> {
        self.errors
            .iter()
            .map(|e| FieldError {
                field: e.field().to_string(),
                message: e.to_string(),
            })
            .collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::Required { field: "name" };
        assert_eq!(err.to_string(), "The name field is required.");

        let err = ValidationError::NotNumeric { field: "price" };
        assert_eq!(err.to_string(), "The price field must be a number.");
    }

    #[test]
    fn test_collection_keeps_every_failure() {
        let mut errors = ValidationErrors::new();
        errors.check(Err(ValidationError::Required { field: "name" }));
        errors.check(Ok(()));
        errors.check(Err(ValidationError::NotNumeric { field: "price" }));

        let fields: Vec<_> = errors.iter().map(ValidationError::field).collect();
        assert_eq!(fields, vec!["name", "price"]);
    }

    #[test]
    fn test_empty_collection_is_ok() {
        let errors = ValidationErrors::new();
        assert!(errors.into_result().is_ok());
    }

    #[test]
    fn test_field_errors_shape() {
        let mut errors = ValidationErrors::new();
        errors.check(Err(ValidationError::Required { field: "name" }));
        let shaped = errors.field_errors();
        assert_eq!(shaped.len(), 1);
        assert_eq!(shaped[0].field, "name");
        assert_eq!(shaped[0].message, "The name field is required.");
    }
}
