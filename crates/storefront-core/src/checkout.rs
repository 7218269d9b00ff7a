//! # Checkout
//!
//! Order summary shown beside the checkout form.
//!
//! ## Summary Math
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ORDER SUMMARY                                                          │
//! │                                                                         │
//! │  Subtotal        cart.total()                                          │
//! │  Shipping        Free if subtotal > $100.00, else $9.99                │
//! │  Tax             subtotal × 8%                                         │
//! │  ───────────────────────────────────                                    │
//! │  Total           subtotal + shipping + tax                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Tax is charged on merchandise only, never on shipping.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::Cart;
use crate::money::Money;
use crate::types::TaxRate;

/// Shipping and tax rules applied at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutPolicy {
    /// Subtotals strictly above this ship free.
    pub free_shipping_threshold: Money,

    /// Flat shipping charge below the threshold.
    pub flat_shipping: Money,

    pub tax_rate: TaxRate,
}

impl Default for CheckoutPolicy {
    /// $100.00 free-shipping threshold, $9.99 flat shipping, 8% tax.
    fn default() -> Self {
        CheckoutPolicy {
            free_shipping_threshold: Money::from_dollars(100),
            flat_shipping: Money::from_cents(999),
            tax_rate: TaxRate::from_bps(800),
        }
    }
}

impl CheckoutPolicy {
    /// Shipping charge for a given subtotal. An empty cart ships nothing.
    pub fn shipping_for(&self, subtotal: Money) -> Money {
        if subtotal.is_zero() || subtotal > self.free_shipping_threshold {
            Money::zero()
        } else {
            self.flat_shipping
        }
    }
}

/// The priced breakdown of a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OrderSummary {
    pub subtotal: Money,
    pub shipping: Money,
    pub tax: Money,
    pub total: Money,
}

impl OrderSummary {
    pub fn for_cart(cart: &Cart, policy: &CheckoutPolicy) -> Self {
        let subtotal = cart.total();
        let shipping = policy.shipping_for(subtotal);
        let tax = subtotal.calculate_tax(policy.tax_rate);

        OrderSummary {
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax,
        }
    }

    pub fn is_free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Product;

    fn cart_with(price_cents: i64, quantity: i64) -> Cart {
        let mut cart = Cart::new();
        let product = Product::new("1", "Item", Money::from_cents(price_cents));
        cart.add_item(&product);
        cart.update_quantity("1", quantity);
        cart
    }

    #[test]
    fn test_small_order_pays_shipping() {
        // $24.99 × 2 = $49.98
        let summary = OrderSummary::for_cart(&cart_with(2499, 2), &CheckoutPolicy::default());

        assert_eq!(summary.subtotal, Money::from_cents(4998));
        assert_eq!(summary.shipping, Money::from_cents(999));
        // $49.98 × 8% = $3.9984 → $4.00
        assert_eq!(summary.tax, Money::from_cents(400));
        assert_eq!(summary.total, Money::from_cents(4998 + 999 + 400));
        assert!(!summary.is_free_shipping());
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let policy = CheckoutPolicy::default();

        let at_threshold = OrderSummary::for_cart(&cart_with(10000, 1), &policy);
        assert_eq!(at_threshold.shipping, Money::from_cents(999));

        let above = OrderSummary::for_cart(&cart_with(10001, 1), &policy);
        assert!(above.is_free_shipping());
    }

    #[test]
    fn test_empty_cart_is_all_zero() {
        let summary = OrderSummary::for_cart(&Cart::new(), &CheckoutPolicy::default());

        assert_eq!(summary.total, Money::zero());
        assert!(summary.is_free_shipping());
    }

    #[test]
    fn test_huge_cart_total_saturates() {
        let summary =
            OrderSummary::for_cart(&cart_with(3_000_000_000, i64::MAX), &CheckoutPolicy::default());

        assert_eq!(summary.subtotal, Money::from_cents(i64::MAX));
        assert!(summary.is_free_shipping());
        assert_eq!(summary.total, Money::from_cents(i64::MAX));
    }
}
