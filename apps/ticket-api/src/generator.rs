//! # Invoice Report Generator
//!
//! Turns a sale id into the printable HTML ticket.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  generate(Some("42"))                                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_sale_id ──── None / "" ──────────────► MissingParameter       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌──────────────── sequential (default) ─────────────────┐             │
//! │  │ fetch_company ─► none? CompanyNotFound                │             │
//! │  │ fetch_sale    ─► none? SaleNotFound                   │             │
//! │  │ fetch_items                                           │             │
//! │  └───────────────────────────────────────────────────────┘             │
//! │  ┌──────────────── concurrent_fetch ─────────────────────┐             │
//! │  │ try_join!(company, sale, items)                       │             │
//! │  │ then: company missing? ─► sale missing?               │             │
//! │  └───────────────────────────────────────────────────────┘             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ReceiptTotals::compute ─► ReceiptView::render ─► HTML                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use askama::Template;
use tracing::{debug, info};

use crate::error::TicketError;
use ticket_core::validation::validate_sale_id;
use ticket_core::{
    Amount, CompanyProfile, DateFormatter, LineItem, ReceiptError, ReceiptOptions, ReceiptTotals,
    ReceiptView, SaleRecord,
};
use ticket_db::{QueryExecutor, ReceiptRepository};

/// Everything read from the database for one ticket.
type ReceiptData = (CompanyProfile, SaleRecord, Vec<LineItem>);

/// Builds sale tickets from the receipt tables.
pub struct InvoiceReportGenerator<Q> {
    repo: ReceiptRepository<Q>,
    options: ReceiptOptions,
    dates: Arc<dyn DateFormatter>,
}

impl<Q: QueryExecutor> InvoiceReportGenerator<Q> {
    pub fn new(executor: Q, options: ReceiptOptions, dates: Arc<dyn DateFormatter>) -> Self {
        InvoiceReportGenerator {
            repo: ReceiptRepository::new(executor),
            options,
            dates,
        }
    }

    /// Generates the ticket for `sale_id`.
    ///
    /// ## Errors
    /// - `MissingParameter` when the id is absent or empty
    /// - `CompanyNotFound` / `SaleNotFound` when a required row is missing
    /// - `DataAccess` when any query fails
    /// - `Render` when the template cannot be written
    pub async fn generate(&self, sale_id: Option<&str>) -> Result<String, TicketError> {
        let sale_id = validate_sale_id(sale_id)?;

        let (company, sale, items) = if self.options.concurrent_fetch {
            self.fetch_concurrent(sale_id).await?
        } else {
            self.fetch_sequential(sale_id).await?
        };

        let global_discount = if self.options.include_global_discount {
            sale.global_discount
        } else {
            Amount::zero()
        };

        let totals = ReceiptTotals::compute(&items, global_discount);

        debug!(
            gross = %totals.gross_subtotal.to_fixed(),
            item_discounts = %totals.item_discount_total.to_fixed(),
            global_discount = %totals.global_discount.to_fixed(),
            "Totals computed"
        );

        let html = ReceiptView {
            sale_id,
            company: &company,
            sale: &sale,
            items: &items,
            totals: &totals,
            options: &self.options,
            dates: self.dates.as_ref(),
        }
        .render()
        .map_err(ReceiptError::Render)?;

        info!(
            items = items.len(),
            final_total = %totals.final_total.to_fixed(),
            bytes = html.len(),
            "Receipt generated"
        );

        Ok(html)
    }

    /// Company first, then sale, then items, stopping at the first missing row.
    async fn fetch_sequential(&self, sale_id: &str) -> Result<ReceiptData, TicketError> {
        let company = self
            .repo
            .fetch_company()
            .await?
            .ok_or(ReceiptError::CompanyNotFound)?;

        let sale = self
            .repo
            .fetch_sale(sale_id, self.options.include_seller)
            .await?
            .ok_or_else(|| ReceiptError::SaleNotFound(sale_id.to_string()))?;

        let items = self.repo.fetch_items(sale_id).await?;

        Ok((company, sale, items))
    }

    /// All three reads at once; not-found checks run after they all finish.
    async fn fetch_concurrent(&self, sale_id: &str) -> Result<ReceiptData, TicketError> {
        let (company, sale, items) = tokio::try_join!(
            self.repo.fetch_company(),
            self.repo.fetch_sale(sale_id, self.options.include_seller),
            self.repo.fetch_items(sale_id),
        )?;

        let company = company.ok_or(ReceiptError::CompanyNotFound)?;
        let sale = sale.ok_or_else(|| ReceiptError::SaleNotFound(sale_id.to_string()))?;

        Ok((company, sale, items))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
