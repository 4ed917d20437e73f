//! # Validation Module
//!
//! Input validation for the product form.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Client form                                                  │
//! │  ├── Required markers, immediate feedback                              │
//! │  └── Cosmetic only, never trusted                                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Every field checked, all failures collected                       │
//! │  └── Runs before any file is stored or row written                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  └── NOT NULL constraints as the last line                             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use catalog_core::types::ProductInput;
//! use catalog_core::validation::validate_product_input;
//!
//! let input = ProductInput {
//!     name: "Widget".to_string(),
//!     description: "A test widget".to_string(),
//!     price: "9.99".to_string(),
//! };
//! assert!(validate_product_input(&input).is_ok());
//! ```

use crate::error::{ValidationError, ValidationErrors};
use crate::types::ProductInput;

/// Result type for single-field validation.
pub type ValidationResult = Result<(), ValidationError>;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 255 characters
pub fn validate_name(name: &str) -> ValidationResult {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required { field: "name" });
    }

    if name.chars().count() > 255 {
        return Err(ValidationError::TooLong {
            field: "name",
            max: 255,
        });
    }

    Ok(())
}

/// Validates a product description.
///
/// ## Rules
/// - Must not be empty (after trimming)
pub fn validate_description(description: &str) -> ValidationResult {
    if description.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "description",
        });
    }

    Ok(())
}

/// Validates a price.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must parse as a finite number ("9.99", "1200", "0")
///
/// The submitted text is stored verbatim; this check only guarantees it is
/// numeric. No currency or precision rules are enforced.
///
/// ## Example
/// ```rust
/// use catalog_core::validation::validate_price;
///
/// assert!(validate_price("9.99").is_ok());
/// assert!(validate_price("1200").is_ok());
/// assert!(validate_price("cheap").is_err());
/// ```
pub fn validate_price(price: &str) -> ValidationResult {
    let price = price.trim();

    if price.is_empty() {
        return Err(ValidationError::Required { field: "price" });
    }

    match price.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(()),
        _ => Err(ValidationError::NotNumeric { field: "price" }),
    }
}

/// Normalizes a search query.
///
/// An absent or whitespace-only query means "no filter"; anything else is
/// trimmed and matched as a literal substring.
pub fn normalize_search(query: Option<&str>) -> Option<String> {
    let query = query?.trim();
    if query.is_empty() {
        None
    } else {
        Some(query.to_string())
    }
}

// =============================================================================
// Aggregate Validation
// =============================================================================

/// Validates a full product submission, collecting every failing field.
///
/// ## Contract
/// - Runs before any mutation: no file is stored and no row is written when
///   this returns `Err`.
/// - Reports all failures at once so the form can mark every bad input.
pub fn validate_product_input(input: &ProductInput) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    errors.check(validate_name(&input.name));
    errors.check(validate_description(&input.description));
    errors.check(validate_price(&input.price));

    errors.into_result()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, description: &str, price: &str) -> ProductInput {
        ProductInput {
            name: name.to_string(),
            description: description.to_string(),
            price: price.to_string(),
        }
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Widget").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
        assert!(validate_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_description() {
        assert!(validate_description("A test widget").is_ok());
        assert!(validate_description("").is_err());
        assert!(validate_description("  \n ").is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price("9.99").is_ok());
        assert!(validate_price("1200").is_ok());
        assert!(validate_price("0").is_ok());
        assert!(validate_price(" 3.5 ").is_ok());

        assert!(validate_price("").is_err());
        assert!(validate_price("cheap").is_err());
        assert!(validate_price("9.99 USD").is_err());
        assert!(validate_price("NaN").is_err());
        assert!(validate_price("inf").is_err());
    }

    #[test]
    fn test_normalize_search() {
        assert_eq!(normalize_search(None), None);
        assert_eq!(normalize_search(Some("")), None);
        assert_eq!(normalize_search(Some("   ")), None);
        assert_eq!(normalize_search(Some(" coke ")), Some("coke".to_string()));
    }

    #[test]
    fn test_aggregate_collects_every_field() {
        let err = validate_product_input(&input("", "", "free")).unwrap_err();
        let fields: Vec<_> = err.iter().map(|e| e.field()).collect();
        assert_eq!(fields, vec!["name", "description", "price"]);
    }

    #[test]
    fn test_aggregate_accepts_valid_input() {
        assert!(validate_product_input(&input("Widget", "A test widget", "9.99")).is_ok());
    }
}
