//! # Wishlist State
//!
//! The session's [`WishlistStore`] behind a mutex, same shape as the cart.

use std::sync::{Arc, Mutex, PoisonError};

use storefront_core::Wishlist;
use storefront_store::{SnapshotStorage, WishlistStore};

#[derive(Debug, Clone)]
pub struct WishlistState {
    store: Arc<Mutex<WishlistStore>>,
}

impl WishlistState {
    pub fn load(storage: Arc<dyn SnapshotStorage>) -> Self {
        WishlistState {
            store: Arc::new(Mutex::new(WishlistStore::load(storage))),
        }
    }

    pub fn with_wishlist<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Wishlist) -> R,
    {
        let store = self.store.lock().unwrap_or_else(PoisonError::into_inner);
        f(store.wishlist())
    }

    pub fn with_store_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut WishlistStore) -> R,
    {
        let mut store = self.store.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut store)
    }
}
