//! # Domain Types
//!
//! Request-scoped records read for a single receipt.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Receipt Inputs                                  │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌──────────────────┐   ┌─────────────────┐      │
//! │  │ CompanyProfile  │   │   SaleRecord     │   │    LineItem     │      │
//! │  │  ─────────────  │   │  ──────────────  │   │  ─────────────  │      │
//! │  │  name           │   │  sale_id         │   │  label          │      │
//! │  │  address        │   │  date / time     │   │  quantity       │      │
//! │  │  tax_id (RTN)   │   │  global_discount │   │  unit_price     │      │
//! │  │  phone / email  │   │  customer_*      │   │  discount       │      │
//! │  │  website        │   │  seller_*        │   │                 │      │
//! │  └─────────────────┘   └──────────────────┘   └─────────────────┘      │
//! │                                                                         │
//! │  Built from query rows, never mutated, dropped after the response.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every text field is optional: the tables allow NULL and the outer joins
//! produce NULL for missing customers, sellers and products.

use crate::money::Amount;

// =============================================================================
// Company Profile
// =============================================================================

/// The issuing business, first row of `DATOS DE FACTURA`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompanyProfile {
    pub name: Option<String>,
    pub address: Option<String>,
    /// Registro Tributario Nacional.
    pub tax_id: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
}

// =============================================================================
// Sale Record
// =============================================================================

/// A sale header joined with its customer and seller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SaleRecord {
    pub sale_id: String,
    /// Raw date as stored (`2024-03-05`, `2024-03-05 10:00:00`, ...).
    pub sale_date: Option<String>,
    /// Time of day, printed as-is.
    pub sale_time: Option<String>,
    /// Sale-level discount, 0 when NULL.
    pub global_discount: Amount,
    pub customer_name: Option<String>,
    pub customer_address: Option<String>,
    pub customer_phone: Option<String>,
    pub seller_id: Option<String>,
    pub seller_name: Option<String>,
}

impl SaleRecord {
    /// Name shown on the `Vendedor:` line: name, then id, then `N/A`.
    pub fn seller_label(&self) -> &str {
        non_empty(self.seller_name.as_deref())
            .or_else(|| non_empty(self.seller_id.as_deref()))
            .unwrap_or(crate::NOT_AVAILABLE)
    }

    /// Name shown on the `Cliente:` line, `N/A` without a customer.
    pub fn customer_label(&self) -> &str {
        non_empty(self.customer_name.as_deref()).unwrap_or(crate::NOT_AVAILABLE)
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One product line of a sale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineItem {
    /// Product name, or the raw product id when the product row is missing.
    pub label: Option<String>,
    pub quantity: f64,
    pub unit_price: Amount,
    /// Discount for this line; only ever shown in aggregate by default.
    pub discount: Amount,
}

impl LineItem {
    /// quantity × unit price, before any discount.
    #[inline]
    pub fn gross(&self) -> Amount {
        self.unit_price * self.quantity
    }
}

/// Treats empty strings like NULL, matching how the receipt falls back.
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

// =============================================================================
// Unit Tests
// =============================================================================
