//! # Amount Module
//!
//! Provides the `Amount` type used for every monetary value on a receipt.
//!
//! ## Why a Float Newtype?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  SOURCE DATA                                                            │
//! │                                                                         │
//! │  VENTA.DESCUENTO, DETALLE VENTA.CANTIDAD / PRECIO UNITARIO / DESCUENTO │
//! │  are stored as decimal or text columns and read as floats.             │
//! │                                                                         │
//! │  Quantities can be fractional (1.5 kg), so the math stays in f64 and   │
//! │  only rounds at display time: to_fixed() → "14.00"                      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use ticket_core::money::Amount;
//!
//! let price = Amount::new(10.0);
//! let line = price * 2.0;
//! let total = line - Amount::new(6.0);
//! assert_eq!(total.to_fixed(), "14.00");
//! ```

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};

// =============================================================================
// Amount Type
// =============================================================================

/// A monetary value as read from the sales tables.
///
/// ## Where Amount is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  LineItem.unit_price × quantity ──► line gross ──► gross subtotal      │
/// │                                                                         │
/// │  LineItem.discount ──► item discount total ──┐                          │
/// │  SaleRecord.global_discount ─────────────────┴─► total discount        │
/// │                                                                         │
/// │  gross subtotal − total discount ──► final total ──► "Total Venta:"    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Amount(f64);

impl Amount {
    /// Wraps a raw float.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Amount(value)
    }

    /// Zero amount.
    #[inline]
    pub const fn zero() -> Self {
        Amount(0.0)
    }

    /// Returns the raw float.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Checks if the value is exactly zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Renders the amount with exactly two decimals.
    ///
    /// A value exactly halfway between two cents rounds away from zero
    /// (`1.125` → `1.13`); everything else rounds to the nearest cent of its
    /// exact binary value (`2.675` is stored as `2.67499…` → `2.67`).
    /// Negative zero (e.g. `-0.001` after rounding) is printed as `0.00`.
    ///
    /// ## Example
    /// ```rust
    /// use ticket_core::money::Amount;
    ///
    /// assert_eq!(Amount::new(20.0).to_fixed(), "20.00");
    /// assert_eq!(Amount::new(3.456).to_fixed(), "3.46");
    /// assert_eq!(Amount::new(1.125).to_fixed(), "1.13");
    /// assert_eq!(Amount::new(-0.001).to_fixed(), "0.00");
    /// ```
    pub fn to_fixed(&self) -> String {
        let value = if is_half_cent(self.0) {
            (self.0 * 100.0).round() / 100.0
        } else {
            self.0
        };

        let rendered = format!("{:.2}", value);
        match rendered.strip_prefix('-') {
            Some(rest) if rest.bytes().all(|b| b == b'0' || b == b'.') => rest.to_string(),
            _ => rendered,
        }
    }
}

/// True when `value` sits exactly on a half cent.
///
/// Only multiples of 1/8 can: `{:.2}` would send those to the even cent.
fn is_half_cent(value: f64) -> bool {
    (value * 8.0).fract() == 0.0 && (value * 100.0).fract().abs() == 0.5
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display uses the shortest form (`2`, `2.5`), which is how quantities are
/// printed on the receipt. Use [`Amount::to_fixed`] for money columns.
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&shortest(self.0))
    }
}

/// Shortest decimal form of a float: `2`, `2.5`, `0.30000000000000004`.
pub fn shortest(value: f64) -> String {
    if value == 0.0 {
        // also folds -0
        return "0".to_string();
    }
    value.to_string()
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Amount(value)
    }
}

impl Add for Amount {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Amount(self.0 + other.0)
    }
}

impl AddAssign for Amount {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Amount {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Amount(self.0 - other.0)
    }
}

/// Multiplication by a quantity.
impl Mul<f64> for Amount {
    type Output = Self;

    #[inline]
    fn mul(self, qty: f64) -> Self {
        Amount(self.0 * qty)
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, a| acc + a)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_fixed() {
        assert_eq!(Amount::new(14.0).to_fixed(), "14.00");
        assert_eq!(Amount::new(0.0).to_fixed(), "0.00");
        assert_eq!(Amount::new(1.5).to_fixed(), "1.50");
        assert_eq!(Amount::new(-2.25).to_fixed(), "-2.25");
    }

    #[test]
    fn test_half_cent_rounds_up() {
        assert_eq!(Amount::new(0.125).to_fixed(), "0.13");
        assert_eq!(Amount::new(1.125).to_fixed(), "1.13");
        assert_eq!(Amount::new(0.375).to_fixed(), "0.38");
        assert_eq!(Amount::new(0.625).to_fixed(), "0.63");
        assert_eq!(Amount::new(-1.125).to_fixed(), "-1.13");
        assert_eq!((Amount::new(2.25) * 0.5).to_fixed(), "1.13");
    }

    #[test]
    fn test_near_ties_keep_binary_value() {
        // 2.675 and 1.005 are stored slightly below the half cent
        assert_eq!(Amount::new(2.675).to_fixed(), "2.67");
        assert_eq!(Amount::new(1.005).to_fixed(), "1.00");
        assert_eq!(Amount::new(0.135).to_fixed(), "0.14");
    }

    #[test]
    fn test_negative_zero_is_normalized() {
        assert_eq!(Amount::new(-0.0).to_fixed(), "0.00");
        assert_eq!(Amount::new(-0.004).to_fixed(), "0.00");
        assert_eq!(Amount::new(-0.0).to_string(), "0");
    }

    #[test]
    fn test_display_shortest_form() {
        assert_eq!(Amount::new(2.0).to_string(), "2");
        assert_eq!(Amount::new(2.5).to_string(), "2.5");
        assert_eq!(Amount::new(0.0).to_string(), "0");
    }

    #[test]
    fn test_arithmetic() {
        let a = Amount::new(10.0);
        let b = Amount::new(4.0);

        assert_eq!((a + b).value(), 14.0);
        assert_eq!((a - b).value(), 6.0);
        assert_eq!((a * 3.0).value(), 30.0);

        let mut acc = Amount::zero();
        acc += a;
        acc += b;
        assert_eq!(acc.value(), 14.0);
    }

    #[test]
    fn test_sum() {
        let total: Amount = [1.0, 2.0, 3.5].into_iter().map(Amount::new).sum();
        assert_eq!(total.to_fixed(), "6.50");
    }
}
