//! # Cart
//!
//! The cart reducer: line items plus a derived total.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  UI Action              CartAction                  State Change        │
//! │  ─────────              ──────────                  ────────────        │
//! │                                                                         │
//! │  Add to Cart ─────────► AddItem(product) ─────────► qty += 1 or push    │
//! │                                                                         │
//! │  Quantity stepper ────► UpdateQuantity{id, n} ────► qty = max(0, n)     │
//! │                                                     (0 removes the line)│
//! │                                                                         │
//! │  Trash icon ──────────► RemoveItem(id) ───────────► items.retain(..)    │
//! │                                                                         │
//! │  After checkout ──────► Clear ────────────────────► items.clear()       │
//! │                                                                         │
//! │  EVERY action ends with total = Σ(price × quantity)                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one line item per product id
//! - Every line item has quantity ≥ 1
//! - `total()` equals the recomputed sum after every action
//! - Actions on absent ids are no-ops, never errors

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::Product;

// =============================================================================
// Line Item
// =============================================================================

/// A product paired with a purchase quantity.
///
/// Serialized flat, as the product's fields plus `quantity`, which is the
/// persisted snapshot layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartLineItem {
    #[serde(flatten)]
    pub product: Product,

    /// Always ≥ 1 while the item is in a cart.
    pub quantity: u32,
}

impl CartLineItem {
    pub fn new(product: Product, quantity: u32) -> Self {
        CartLineItem { product, quantity }
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.product.id
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.product.price * self.quantity
    }
}

// =============================================================================
// Actions
// =============================================================================

/// A command against the cart, for callers that dispatch rather than call
/// methods directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CartAction {
    AddItem(Product),
    RemoveItem(String),
    UpdateQuantity { id: String, quantity: i64 },
    ClearCart,
}

// =============================================================================
// Cart
// =============================================================================

/// The persisted shape of a cart: `{ "items": [...], "total": 20.5 }`.
///
/// Only used on the way in. `Cart` never trusts the stored total, so any
/// JSON number is accepted for it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CartSnapshot {
    pub items: Vec<CartLineItem>,
    pub total: f64,
}

/// The shopping cart.
///
/// Fields are private so the total can never be set out of sync with the
/// items. Deserialization goes through [`CartSnapshot`] and recomputes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "CartSnapshot")]
pub struct Cart {
    items: Vec<CartLineItem>,
    total: Money,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Σ(price × quantity) over all line items.
    #[inline]
    pub fn total(&self) -> Money {
        self.total
    }

    /// Looks up the line item for a product id.
    pub fn get(&self, id: &str) -> Option<&CartLineItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Number of distinct line items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of quantities across all line items (the header badge count).
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds one unit of `product`.
    ///
    /// ## Behavior
    /// - Product already in cart: its quantity increases by 1
    /// - Product not in cart: appended with quantity 1
    pub fn add_item(&mut self, product: &Product) {
        match self.items.iter_mut().find(|item| item.id() == product.id) {
            Some(item) => item.quantity = item.quantity.saturating_add(1),
            None => self.items.push(CartLineItem::new(product.clone(), 1)),
        }
        self.recompute_total();
    }

    /// Removes the line item for `id`. No-op if absent.
    pub fn remove_item(&mut self, id: &str) {
        self.items.retain(|item| item.id() != id);
        self.recompute_total();
    }

    /// Sets the quantity of the line item for `id` to `max(0, quantity)`.
    ///
    /// ## Behavior
    /// - Clamped quantity 0 (including any negative input): item removed
    /// - Product not in cart: no-op
    pub fn update_quantity(&mut self, id: &str, quantity: i64) {
        let clamped = u32::try_from(quantity.max(0)).unwrap_or(u32::MAX);

        if clamped == 0 {
            self.items.retain(|item| item.id() != id);
        } else if let Some(item) = self.items.iter_mut().find(|item| item.id() == id) {
            item.quantity = clamped;
        }
        self.recompute_total();
    }

    /// Resets to the empty cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.total = Money::zero();
    }

    /// Applies a dispatched action.
    pub fn apply(&mut self, action: CartAction) {
        match action {
            CartAction::AddItem(product) => self.add_item(&product),
            CartAction::RemoveItem(id) => self.remove_item(&id),
            CartAction::UpdateQuantity { id, quantity } => self.update_quantity(&id, quantity),
            CartAction::ClearCart => self.clear(),
        }
    }

    fn recompute_total(&mut self) {
        self.total = self.items.iter().map(CartLineItem::line_total).sum();
    }
}

/// Rebuilds a cart from a persisted snapshot.
///
/// ## Repairs
/// - The stored total is discarded and recomputed
/// - Zero-quantity lines are dropped
/// - Duplicate ids are merged into the first occurrence
impl From<CartSnapshot> for Cart {
    fn from(snapshot: CartSnapshot) -> Self {
        let mut items: Vec<CartLineItem> = Vec::with_capacity(snapshot.items.len());

        for line in snapshot.items.into_iter().filter(|line| line.quantity > 0) {
            match items.iter_mut().find(|item| item.id() == line.id()) {
                Some(existing) => {
                    existing.quantity = existing.quantity.saturating_add(line.quantity)
                }
                None => items.push(line),
            }
        }

        let mut cart = Cart {
            items,
            total: Money::zero(),
        };
        cart.recompute_total();
        cart
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
