//! # Cart Store
//!
//! The cart plus its persistence. Every mutator applies the change in
//! memory, then writes the full cart snapshot under `"cart"`.
//!
//! ```text
//! add_item ──► Cart::add_item ──► save_snapshot("cart") ──► &Cart
//!                                       │
//!                                       └─ Err ──► error! (state kept)
//! ```

use std::sync::Arc;

use storefront_core::{Cart, CartAction, Product, CART_STORAGE_KEY};
use tracing::{debug, error};

use crate::snapshot::{load_snapshot, save_snapshot};
use crate::storage::SnapshotStorage;

/// Persistent cart.
pub struct CartStore {
    cart: Cart,
    storage: Arc<dyn SnapshotStorage>,
}

impl CartStore {
    /// Rehydrates the cart from `storage`, or starts empty.
    pub fn load(storage: Arc<dyn SnapshotStorage>) -> Self {
        let cart: Cart = load_snapshot(storage.as_ref(), CART_STORAGE_KEY).unwrap_or_default();
        debug!(
            lines = cart.item_count(),
            total = %cart.total(),
            "Cart rehydrated"
        );
        CartStore { cart, storage }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn add_item(&mut self, product: &Product) -> &Cart {
        self.cart.add_item(product);
        self.persist()
    }

    pub fn remove_item(&mut self, id: &str) -> &Cart {
        self.cart.remove_item(id);
        self.persist()
    }

    /// Sets the quantity of `id`. Values ≤ 0 remove the line.
    pub fn update_quantity(&mut self, id: &str, quantity: i64) -> &Cart {
        self.cart.update_quantity(id, quantity);
        self.persist()
    }

    pub fn clear(&mut self) -> &Cart {
        self.cart.clear();
        self.persist()
    }

    pub fn dispatch(&mut self, action: CartAction) -> &Cart {
        self.cart.apply(action);
        self.persist()
    }

    fn persist(&self) -> &Cart {
        if let Err(err) = save_snapshot(self.storage.as_ref(), CART_STORAGE_KEY, &self.cart) {
            error!(error = %err, "Failed to persist cart");
        }
        &self.cart
    }
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore").field("cart", &self.cart).finish()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
