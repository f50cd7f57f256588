//! # Receipt Options
//!
//! Switches that select between the receipt layouts the business has used.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Flag                      Default     Effect                           │
//! │  ────────────────────────  ──────────  ───────────────────────────────  │
//! │  include_global_discount   true        VENTA.DESCUENTO counts toward    │
//! │                                        "Descuento Total"                │
//! │  include_seller            true        join VENDEDORES, "Vendedor:" row │
//! │  discount_display          aggregate   per_line adds a "Desc." column   │
//! │  concurrent_fetch          false       run the three reads together     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

/// Where item discounts are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountDisplay {
    /// Only the footer shows discounts (4 columns).
    #[default]
    Aggregate,
    /// Each row also shows its own discount (5 columns).
    PerLine,
}

impl DiscountDisplay {
    /// Number of item table columns for this layout.
    pub fn columns(&self) -> usize {
        match self {
            DiscountDisplay::Aggregate => 4,
            DiscountDisplay::PerLine => 5,
        }
    }
}

impl std::fmt::Display for DiscountDisplay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiscountDisplay::Aggregate => write!(f, "aggregate"),
            DiscountDisplay::PerLine => write!(f, "per_line"),
        }
    }
}

/// Receipt generation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptOptions {
    #[serde(default = "default_true")]
    pub include_global_discount: bool,

    #[serde(default = "default_true")]
    pub include_seller: bool,

    #[serde(default)]
    pub discount_display: DiscountDisplay,

    #[serde(default)]
    pub concurrent_fetch: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ReceiptOptions {
    fn default() -> Self {
        ReceiptOptions {
            include_global_discount: true,
            include_seller: true,
            discount_display: DiscountDisplay::default(),
            concurrent_fetch: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ReceiptOptions::default();
        assert!(options.include_global_discount);
        assert!(options.include_seller);
        assert_eq!(options.discount_display, DiscountDisplay::Aggregate);
        assert!(!options.concurrent_fetch);
    }

    #[test]
    fn test_discount_display_names() {
        let display: DiscountDisplay = serde_json::from_str(r#""per_line""#).unwrap();
        assert_eq!(display, DiscountDisplay::PerLine);
        assert_eq!(display.to_string(), "per_line");
        assert!(serde_json::from_str::<DiscountDisplay>(r#""sideways""#).is_err());
    }

    #[test]
    fn test_partial_deserialization_uses_defaults() {
        let options: ReceiptOptions =
            serde_json::from_str(r#"{"discount_display":"per_line"}"#).unwrap();
        assert!(options.include_seller);
        assert_eq!(options.discount_display, DiscountDisplay::PerLine);
    }
}
