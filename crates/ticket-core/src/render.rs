//! # Receipt Rendering
//!
//! Produces the self-contained HTML ticket and the error page.
//!
//! ## Document Layout
//! ```text
//! ┌──────────────────────────── 58 mm ────────────────────────────┐
//! │                     COMPANY NAME                              │
//! │                address · RTN · tel · mail · web               │
//! │                                                               │
//! │                 RECIBO #<id>  <d/m/yyyy> <time>               │
//! │                 Vendedor: <seller>          (include_seller)  │
//! │                 Cliente: <name> · address · tel               │
//! │ ───────────────────────────────────────────────────────────── │
//! │ Descripción        Cant.   Precio   [Desc.]   Total           │
//! │ <label>            <qty>   <0.00>   [<0.00>]  <0.00>          │
//! │ ───────────────────────────────────────────────────────────── │
//! │                               Descuento Total:   <0.00>       │
//! │                                   Total Venta:   <0.00>       │
//! │                  ¡Gracias por su compra!                      │
//! └───────────────────────────────────────────────────────────────┘
//!   window.onload → print(); manual button if that throws
//! ```
//!
//! Both pages are askama templates. Every interpolated value goes through
//! [`NamedEntities`](crate::escape::NamedEntities), so `'` comes out as
//! `&apos;` rather than askama's numeric reference.

use askama::Template;

use crate::format::DateFormatter;
use crate::options::{DiscountDisplay, ReceiptOptions};
use crate::totals::ReceiptTotals;
use crate::types::{non_empty, CompanyProfile, LineItem, SaleRecord};
use crate::NOT_AVAILABLE;

// =============================================================================
// Receipt View
// =============================================================================

/// Everything the receipt template needs, borrowed from the request.
///
/// Markup lives in `templates/receipt.html`.
#[derive(Template)]
#[template(path = "receipt.html")]
pub struct ReceiptView<'a> {
    /// The id as requested (printed in the title and header).
    pub sale_id: &'a str,
    pub company: &'a CompanyProfile,
    pub sale: &'a SaleRecord,
    pub items: &'a [LineItem],
    pub totals: &'a ReceiptTotals,
    pub options: &'a ReceiptOptions,
    pub dates: &'a dyn DateFormatter,
}

impl ReceiptView<'_> {
    /// Date text for the header: formatted, raw when unparseable, `N/A` when absent.
    fn date_text(&self) -> String {
        match non_empty(self.sale.sale_date.as_deref()) {
            Some(raw) => self
                .dates
                .format_date(raw)
                .unwrap_or_else(|| raw.to_string()),
            None => NOT_AVAILABLE.to_string(),
        }
    }

    fn per_line(&self) -> bool {
        self.options.discount_display == DiscountDisplay::PerLine
    }

    /// Columns spanned by the footer labels.
    fn label_span(&self) -> usize {
        self.options.discount_display.columns() - 1
    }
}

// =============================================================================
// Error Page
// =============================================================================

/// The HTML returned with a 500 when generation fails.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPage<'a> {
    pub sale_id: &'a str,
    pub message: &'a str,
}

mod filters {
    use crate::money::shortest;

    /// NULL columns print as nothing.
    pub fn or_empty(value: &Option<String>) -> askama::Result<&str> {
        Ok(value.as_deref().unwrap_or_default())
    }

    pub fn quantity(value: &f64) -> askama::Result<String> {
        Ok(shortest(*value))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
