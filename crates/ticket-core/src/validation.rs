//! # Validation Module
//!
//! Input validation for the receipt endpoint.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP handler                                                 │
//! │  └── Query string deserialization (id is optional there)               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  └── id present and non-empty → MissingParameter otherwise (400)       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database                                                     │
//! │  └── Parameterized lookup → SaleNotFound when no row (500)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The sale id is opaque: numeric and alphanumeric ids are both accepted and
//! the database decides whether it exists.

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Name of the query parameter carrying the sale id.
pub const SALE_ID_PARAM: &str = "id";

/// Validates the sale id taken from the request.
///
/// ## Rules
/// - Must be present
/// - Must not be the empty string
///
/// Whitespace is not trimmed; `" "` is handed to the lookup and will simply
/// not match a sale.
///
/// ## Example
/// ```rust
/// use ticket_core::validation::validate_sale_id;
///
/// assert_eq!(validate_sale_id(Some("42")).unwrap(), "42");
/// assert!(validate_sale_id(Some("")).is_err());
/// assert!(validate_sale_id(None).is_err());
/// ```
pub fn validate_sale_id(raw: Option<&str>) -> ValidationResult<&str> {
    match raw {
        Some(id) if !id.is_empty() => Ok(id),
        _ => Err(ValidationError::Required {
            field: SALE_ID_PARAM.to_string(),
        }),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_ids() {
        assert!(validate_sale_id(Some("1")).is_ok());
        assert!(validate_sale_id(Some("V-2024-0001")).is_ok());
        assert!(validate_sale_id(Some("<script>")).is_ok());
    }

    #[test]
    fn test_missing_or_empty() {
        let err = validate_sale_id(None).unwrap_err();
        assert_eq!(err.to_string(), "id is required");
        assert!(validate_sale_id(Some("")).is_err());
    }

    #[test]
    fn test_whitespace_passes_through() {
        assert_eq!(validate_sale_id(Some(" ")).unwrap(), " ");
    }
}
