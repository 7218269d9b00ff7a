//! # Money Module
//!
//! Provides the `Money` type for prices, line totals and order totals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  A cart of three $0.10 stickers in floating point:                      │
//! │    0.1 + 0.1 + 0.1 = 0.30000000000000004  ❌                             │
//! │                                                                         │
//! │  The cart total must ALWAYS equal Σ(price × quantity). With floats      │
//! │  a recomputed total can drift from one computed in a different order.   │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    10 + 10 + 10 = 30 cents, in any order                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::money::Money;
//!
//! let price = Money::from_cents(29999); // $299.99
//! let line_total = price * 2u32;        // $599.98
//! assert_eq!(line_total.to_string(), "$599.98");
//! ```

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};
use ts_rs::TS;

use crate::types::TaxRate;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents for USD).
///
/// Held as integer cents. On the wire it is a plain number of currency
/// units, so a persisted `{"price": 10.99}` is 1099 cents. Any JSON number
/// is accepted on the way in and rounded to the nearest cent.
///
/// Arithmetic saturates at the `i64` bounds instead of wrapping.
///
/// ## Where Money is Used
/// ```text
/// Product.price ──► CartLineItem.line_total ──► Cart.total
///                                                   │
///                                                   ▼
///                           OrderSummary { subtotal, shipping, tax, total }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, TS)]
#[ts(export)]
pub struct Money(#[ts(type = "number")] i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole dollars.
    ///
    /// Used for the price slider, which works in whole dollars.
    #[inline]
    pub const fn from_dollars(dollars: i64) -> Self {
        Money(dollars.saturating_mul(100))
    }

    /// Creates a Money value from dollars and cents.
    ///
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// assert_eq!(Money::from_major_minor(24, 99).cents(), 2499);
    /// ```
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-dollar portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies a unit price by a quantity.
    ///
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(2499);
    /// assert_eq!(unit_price.multiply_quantity(3).cents(), 7497);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0.saturating_mul(qty as i64))
    }

    /// Calculates tax on this amount, rounding half up to the nearest cent.
    ///
    /// ## Implementation
    /// Integer math: `(amount * bps + 5000) / 10000`. i128 keeps large
    /// carts from overflowing the intermediate product.
    ///
    /// ```rust
    /// use storefront_core::money::Money;
    /// use storefront_core::types::TaxRate;
    ///
    /// // $299.99 at 8% = $23.9992 → $24.00
    /// let tax = Money::from_cents(29999).calculate_tax(TaxRate::from_bps(800));
    /// assert_eq!(tax.cents(), 2400);
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        let tax_cents = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_cents(tax_cents.clamp(i64::MIN as i128, i64::MAX as i128) as i64)
    }

    /// Converts a decimal amount in currency units, rounding to the nearest
    /// cent. `None` for NaN, infinities and amounts outside the cent range.
    ///
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// assert_eq!(Money::from_decimal(299.99), Some(Money::from_cents(29999)));
    /// assert_eq!(Money::from_decimal(f64::NAN), None);
    /// ```
    pub fn from_decimal(amount: f64) -> Option<Money> {
        let cents = (amount * 100.0).round();
        // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive.
        if cents.is_finite() && cents >= i64::MIN as f64 && cents < i64::MAX as f64 {
            Some(Money(cents as i64))
        } else {
            None
        }
    }

    /// The amount in currency units, for the wire format.
    pub fn to_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

// =============================================================================
// Serde
// =============================================================================

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_decimal())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_f64(MoneyVisitor)
    }
}

struct MoneyVisitor;

impl<'de> Visitor<'de> for MoneyVisitor {
    type Value = Money;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an amount in currency units")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Money, E> {
        Ok(Money(v.saturating_mul(100)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Money, E> {
        let units = i64::try_from(v).unwrap_or(i64::MAX);
        Ok(Money(units.saturating_mul(100)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Money, E> {
        Money::from_decimal(v)
            .ok_or_else(|| E::invalid_value(de::Unexpected::Float(v), &self))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Debug-friendly rendering. The app formats with the configured currency.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

/// Multiplication by a cart quantity.
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(Money::from_cents(1099).cents(), 1099);
        assert_eq!(Money::from_dollars(500).cents(), 50000);
        assert_eq!(Money::from_major_minor(9, 99).cents(), 999);
        assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(29999).to_string(), "$299.99");
        assert_eq!(Money::from_cents(500).to_string(), "$5.00");
        assert_eq!(Money::from_cents(-550).to_string(), "-$5.50");
        assert_eq!(Money::zero().to_string(), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(250);

        assert_eq!((a + b).cents(), 1250);
        assert_eq!((a - b).cents(), 750);
        assert_eq!((a * 3u32).cents(), 3000);
        assert_eq!((a * 2i64).cents(), 2000);
    }

    #[test]
    fn test_sum() {
        let prices = [Money::from_cents(10), Money::from_cents(10), Money::from_cents(10)];
        let total: Money = prices.iter().sum();
        assert_eq!(total.cents(), 30);

        let empty: Money = Vec::<Money>::new().into_iter().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_tax_rounds_half_up() {
        // $10.00 at 8% = $0.80 exactly
        assert_eq!(Money::from_cents(1000).calculate_tax(TaxRate::from_bps(800)).cents(), 80);
        // $0.0625 → $0.06, $0.1875 → $0.19
        assert_eq!(Money::from_cents(125).calculate_tax(TaxRate::from_bps(500)).cents(), 6);
        assert_eq!(Money::from_cents(375).calculate_tax(TaxRate::from_bps(500)).cents(), 19);
    }

    #[test]
    fn test_arithmetic_saturates() {
        let big = Money::from_cents(3_000_000_000);

        assert_eq!(big.multiply_quantity(u32::MAX).cents(), i64::MAX);
        assert_eq!((Money::from_cents(i64::MAX) + Money::from_cents(1)).cents(), i64::MAX);
        assert_eq!((Money::from_cents(i64::MIN) - Money::from_cents(1)).cents(), i64::MIN);
        assert_eq!((big * i64::MAX).cents(), i64::MAX);

        let total: Money = [Money::from_cents(i64::MAX), big].iter().sum();
        assert_eq!(total.cents(), i64::MAX);
    }

    #[test]
    fn test_serializes_as_currency_units() {
        let json = serde_json::to_string(&Money::from_cents(2499)).unwrap();
        assert_eq!(json, "24.99");

        let back: Money = serde_json::from_str("24.99").unwrap();
        assert_eq!(back, Money::from_cents(2499));
    }

    #[test]
    fn test_deserializes_any_number() {
        let whole: Money = serde_json::from_str("20").unwrap();
        assert_eq!(whole, Money::from_cents(2000));

        let fractional: Money = serde_json::from_str("20.5").unwrap();
        assert_eq!(fractional, Money::from_cents(2050));

        // Sub-cent precision rounds to the nearest cent.
        let rounded: Money = serde_json::from_str("0.125").unwrap();
        assert_eq!(rounded, Money::from_cents(13));

        assert!(serde_json::from_str::<Money>(r#""20""#).is_err());
        assert!(serde_json::from_str::<Money>("1e300").is_err());
    }
}
