//! # Wishlist
//!
//! Saved-for-later products. Set semantics keyed by product id, insertion
//! order kept for display, no quantities.
//!
//! Serialized as a bare `Product[]`.

use serde::{Deserialize, Serialize};

use crate::types::Product;

/// The wishlist.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Product>", into = "Vec<Product>")]
pub struct Wishlist {
    items: Vec<Product>,
}

impl Wishlist {
    pub fn new() -> Self {
        Wishlist::default()
    }

    /// Saved products in the order they were added.
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Membership query (the filled-in heart icon).
    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    /// Appends `product` unless its id is already saved.
    pub fn add_item(&mut self, product: &Product) {
        if !self.contains(&product.id) {
            self.items.push(product.clone());
        }
    }

    /// Removes the product with `id`. No-op if absent.
    pub fn remove_item(&mut self, id: &str) {
        self.items.retain(|item| item.id != id);
    }

    /// Removes `product` if saved, otherwise adds it.
    ///
    /// Returns whether the product is saved after the call.
    pub fn toggle_item(&mut self, product: &Product) -> bool {
        if self.contains(&product.id) {
            self.remove_item(&product.id);
            false
        } else {
            self.items.push(product.clone());
            true
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

/// Rehydration keeps the first occurrence of each id.
impl From<Vec<Product>> for Wishlist {
    fn from(products: Vec<Product>) -> Self {
        let mut wishlist = Wishlist::new();
        for product in &products {
            wishlist.add_item(product);
        }
        wishlist
    }
}

impl From<Wishlist> for Vec<Product> {
    fn from(wishlist: Wishlist) -> Self {
        wishlist.items
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
