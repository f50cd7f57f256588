//! # Error Types
//!
//! Domain-specific error types for ticket-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  ticket-core errors (this file)                                        │
//! │  ├── ReceiptError     - Receipt generation failures                    │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  ticket-db errors (separate crate)                                     │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  ticket-api errors (in app)                                            │
//! │  └── TicketError      - Mapped to 400 / 500 responses                  │
//! │                                                                         │
//! │  Flow: ValidationError → ReceiptError → TicketError → HTTP response    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Receipt Error
// =============================================================================

/// Failures that stop a receipt from being generated.
///
/// The not-found messages are shown to the cashier on the error page.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// The caller did not supply a sale id.
    ///
    /// Distinct from [`ReceiptError::SaleNotFound`]: this is a client input
    /// problem and is answered with a 400.
    #[error("Missing parameter: {0}")]
    MissingParameter(#[from] ValidationError),

    /// The company profile table is empty.
    #[error("No se encontraron datos de la empresa en DATOS DE FACTURA.")]
    CompanyNotFound,

    /// No sale row matches the requested id.
    #[error("Venta con ID {0} no encontrada.")]
    SaleNotFound(String),

    /// The template failed to write.
    #[error("Template error: {0}")]
    Render(#[from] askama::Error),
}

impl ReceiptError {
    /// Returns true for the two "no such row" cases.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ReceiptError::CompanyNotFound | ReceiptError::SaleNotFound(_)
        )
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ReceiptError::SaleNotFound("42".to_string());
        assert_eq!(err.to_string(), "Venta con ID 42 no encontrada.");

        let err = ReceiptError::CompanyNotFound;
        assert_eq!(
            err.to_string(),
            "No se encontraron datos de la empresa en DATOS DE FACTURA."
        );
    }

    #[test]
    fn test_validation_converts_to_receipt_error() {
        let validation_err = ValidationError::Required {
            field: "id".to_string(),
        };
        let err: ReceiptError = validation_err.into();
        assert!(matches!(err, ReceiptError::MissingParameter(_)));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_not_found_classification() {
        assert!(ReceiptError::CompanyNotFound.is_not_found());
        assert!(ReceiptError::SaleNotFound("7".into()).is_not_found());
    }
}
