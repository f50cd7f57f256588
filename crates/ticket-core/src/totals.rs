//! # Receipt Totals
//!
//! The only arithmetic on a receipt.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  for each LineItem (database order):                                    │
//! │      gross_subtotal      += quantity × unit_price                       │
//! │      item_discount_total += discount                                    │
//! │                                                                         │
//! │  total_discount = item_discount_total + global_discount                 │
//! │  final_total    = gross_subtotal − total_discount                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::money::Amount;
use crate::types::LineItem;

/// Aggregates printed in the receipt footer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ReceiptTotals {
    pub gross_subtotal: Amount,
    pub item_discount_total: Amount,
    pub global_discount: Amount,
    pub total_discount: Amount,
    pub final_total: Amount,
}

impl ReceiptTotals {
    /// Sums the line items and applies the sale-level discount.
    ///
    /// An empty item list is valid and yields the global discount as a
    /// negative final total (or all zeros without one).
    ///
    /// ## Example
    /// ```rust
    /// use ticket_core::{Amount, LineItem, ReceiptTotals};
    ///
    /// let items = vec![LineItem {
    ///     label: Some("Cafe".into()),
    ///     quantity: 2.0,
    ///     unit_price: Amount::new(10.0),
    ///     discount: Amount::new(1.0),
    /// }];
    /// let totals = ReceiptTotals::compute(&items, Amount::new(5.0));
    /// assert_eq!(totals.total_discount.to_fixed(), "6.00");
    /// assert_eq!(totals.final_total.to_fixed(), "14.00");
    /// ```
    pub fn compute(items: &[LineItem], global_discount: Amount) -> Self {
        let mut gross_subtotal = Amount::zero();
        let mut item_discount_total = Amount::zero();

        for item in items {
            gross_subtotal += item.gross();
            item_discount_total += item.discount;
        }

        let total_discount = item_discount_total + global_discount;

        ReceiptTotals {
            gross_subtotal,
            item_discount_total,
            global_discount,
            total_discount,
            final_total: gross_subtotal - total_discount,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
