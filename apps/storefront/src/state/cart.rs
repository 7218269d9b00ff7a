//! # Cart State
//!
//! The session's [`CartStore`] behind a mutex.
//!
//! ## Thread Safety
//! `Arc<Mutex<CartStore>>` so commands on any thread see one cart. Cart
//! operations are short and almost all of them write, so a `RwLock`
//! would buy nothing.

use std::sync::{Arc, Mutex, PoisonError};

use storefront_core::Cart;
use storefront_store::{CartStore, SnapshotStorage};

#[derive(Debug, Clone)]
pub struct CartState {
    store: Arc<Mutex<CartStore>>,
}

impl CartState {
    /// Rehydrates the cart from `storage`.
    pub fn load(storage: Arc<dyn SnapshotStorage>) -> Self {
        CartState {
            store: Arc::new(Mutex::new(CartStore::load(storage))),
        }
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let total = cart_state.with_cart(|cart| cart.total());
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let store = self.store.lock().unwrap_or_else(PoisonError::into_inner);
        f(store.cart())
    }

    /// Executes a function with write access; every store mutator persists.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// cart_state.with_store_mut(|store| store.add_item(&product).total());
    /// ```
    pub fn with_store_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut CartStore) -> R,
    {
        let mut store = self.store.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut store)
    }
}
