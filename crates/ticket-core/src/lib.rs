//! # ticket-core: Pure Receipt Logic
//!
//! This crate contains everything about a sale ticket that does not touch the
//! network or the database: the record types, the totals, HTML escaping, date
//! formatting and the template itself.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Ticket Receipt Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              ticket-api (GET /api/factura-ticket)               │   │
//! │  │      validate id ──► InvoiceReportGenerator ──► HTML / 4xx-5xx  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ ticket-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  totals   │  │  escape   │  │  render   │  │   │
//! │  │   │  Company  │  │  gross    │  │  & < > "' │  │  ticket   │  │   │
//! │  │   │  Sale     │  │  discount │  │           │  │  error    │  │   │
//! │  │   │  LineItem │  │  final    │  │  format   │  │  page     │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 ticket-db (Database Layer)                      │   │
//! │  │           query(sql, params) → rows, receipt repository         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Company profile, sale record, line item
//! - [`money`] - `Amount` and two-decimal formatting
//! - [`totals`] - Gross subtotal, discounts, final total
//! - [`escape`] - HTML escaping
//! - [`format`] - Locale date formatting behind a trait
//! - [`render`] - The ticket template and the error page
//! - [`options`] - Layout switches
//! - [`validation`] - Request input checks
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use ticket_core::{Amount, LineItem, ReceiptTotals};
//!
//! let items = vec![LineItem {
//!     label: Some("Cafe".into()),
//!     quantity: 2.0,
//!     unit_price: Amount::new(10.0),
//!     discount: Amount::new(1.0),
//! }];
//!
//! let totals = ReceiptTotals::compute(&items, Amount::new(5.0));
//! assert_eq!(totals.final_total.to_fixed(), "14.00");
//! ```

// The askama escaper path in askama.toml is absolute.
extern crate self as ticket_core;

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod escape;
pub mod format;
pub mod money;
pub mod options;
pub mod render;
pub mod totals;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{ReceiptError, ValidationError};
pub use format::{DateFormatter, SpanishDateFormatter};
pub use money::Amount;
pub use options::{DiscountDisplay, ReceiptOptions};
pub use render::{ErrorPage, ReceiptView};
pub use totals::ReceiptTotals;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Printed wherever a value is required but missing (date, customer, seller).
pub const NOT_AVAILABLE: &str = "N/A";
