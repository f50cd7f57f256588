//! # API Error Type
//!
//! Unified error type for the receipt endpoint.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Ticket API                         │
//! │                                                                         │
//! │  InvoiceReportGenerator::generate(id)                                  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Missing id?      ── ReceiptError::MissingParameter ──► 400 text/plain  │
//! │         │                                                               │
//! │  No company/sale? ── ReceiptError::*NotFound ─────────► 500 error page  │
//! │         │                                                               │
//! │  Query failed?    ── DbError ──► TicketError::DataAccess ──► 500 page   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Success ──────────────────────────────────────────────► 200 text/html  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A missing sale answers 500 rather than 404; printing clients already
//! treat any non-200 as "show the page to the cashier".

use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use ticket_core::{ErrorPage, ReceiptError, ValidationError};
use ticket_db::DbError;
use tracing::error;

/// Body of the 400 answer. Shown verbatim in the browser.
pub const MISSING_ID_MESSAGE: &str = "Error: Falta el parámetro \"id\" (ID de Venta) en la URL.";

/// Errors produced while answering a receipt request.
#[derive(Debug, thiserror::Error)]
pub enum TicketError {
    /// Validation or not-found failure from the receipt domain.
    #[error(transparent)]
    Receipt(#[from] ReceiptError),

    /// A query failed.
    #[error("Database error: {0}")]
    DataAccess(#[from] DbError),
}

impl From<ValidationError> for TicketError {
    fn from(err: ValidationError) -> Self {
        TicketError::Receipt(ReceiptError::MissingParameter(err))
    }
}

impl TicketError {
    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            TicketError::Receipt(ReceiptError::MissingParameter(_)) => StatusCode::BAD_REQUEST,
            TicketError::Receipt(_) | TicketError::DataAccess(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Attaches the requested id so the error page can name it.
    pub fn for_sale(self, sale_id: impl Into<String>) -> ReceiptFailure {
        ReceiptFailure {
            sale_id: sale_id.into(),
            error: self,
        }
    }
}

/// A failed receipt request, ready to become a response.
#[derive(Debug)]
pub struct ReceiptFailure {
    pub sale_id: String,
    pub error: TicketError,
}

impl IntoResponse for ReceiptFailure {
    fn into_response(self) -> Response {
        let status = self.error.status_code();

        if status == StatusCode::BAD_REQUEST {
            return (status, MISSING_ID_MESSAGE).into_response();
        }

        let message = self.error.to_string();
        let page = ErrorPage {
            sale_id: &self.sale_id,
            message: &message,
        };

        match page.render() {
            Ok(html) => (status, Html(html)).into_response(),
            Err(e) => {
                error!(error = %e, "Error page rendering failed");
                (status, message).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let missing = TicketError::from(ValidationError::Required {
            field: "id".to_string(),
        });
        assert_eq!(missing.status_code(), StatusCode::BAD_REQUEST);

        let not_found = TicketError::from(ReceiptError::SaleNotFound("9".to_string()));
        assert_eq!(not_found.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let company = TicketError::from(ReceiptError::CompanyNotFound);
        assert_eq!(company.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let db = TicketError::from(DbError::QueryFailed("no such table: VENTA".to_string()));
        assert_eq!(db.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_messages() {
        let err = TicketError::from(ReceiptError::SaleNotFound("9".to_string()));
        assert_eq!(err.to_string(), "Venta con ID 9 no encontrada.");

        let err = TicketError::from(DbError::PoolExhausted);
        assert_eq!(err.to_string(), "Database error: Connection pool exhausted");
    }

    #[test]
    fn test_failure_responses() {
        let response = TicketError::from(ValidationError::Required {
            field: "id".to_string(),
        })
        .for_sale("")
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = TicketError::from(ReceiptError::SaleNotFound("9".to_string()))
            .for_sale("9")
            .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.headers()["content-type"],
            "text/html; charset=utf-8"
        );
    }
}
