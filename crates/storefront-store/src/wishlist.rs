//! # Wishlist Store
//!
//! Same shape as [`crate::CartStore`]: in-memory first, then the full
//! product list is written under `"wishlist"`.

use std::sync::Arc;

use storefront_core::{Product, Wishlist, WISHLIST_STORAGE_KEY};
use tracing::{debug, error};

use crate::snapshot::{load_snapshot, save_snapshot};
use crate::storage::SnapshotStorage;

/// Persistent wishlist.
pub struct WishlistStore {
    wishlist: Wishlist,
    storage: Arc<dyn SnapshotStorage>,
}

impl WishlistStore {
    pub fn load(storage: Arc<dyn SnapshotStorage>) -> Self {
        let wishlist: Wishlist =
            load_snapshot(storage.as_ref(), WISHLIST_STORAGE_KEY).unwrap_or_default();
        debug!(items = wishlist.len(), "Wishlist rehydrated");
        WishlistStore { wishlist, storage }
    }

    pub fn wishlist(&self) -> &Wishlist {
        &self.wishlist
    }

    pub fn contains(&self, id: &str) -> bool {
        self.wishlist.contains(id)
    }

    pub fn add_item(&mut self, product: &Product) -> &Wishlist {
        self.wishlist.add_item(product);
        self.persist()
    }

    pub fn remove_item(&mut self, id: &str) -> &Wishlist {
        self.wishlist.remove_item(id);
        self.persist()
    }

    /// Returns whether `product` is saved after the toggle.
    pub fn toggle(&mut self, product: &Product) -> bool {
        let saved = self.wishlist.toggle_item(product);
        self.persist();
        saved
    }

    pub fn clear(&mut self) -> &Wishlist {
        self.wishlist.clear();
        self.persist()
    }

    fn persist(&self) -> &Wishlist {
        if let Err(err) = save_snapshot(self.storage.as_ref(), WISHLIST_STORAGE_KEY, &self.wishlist)
        {
            error!(error = %err, "Failed to persist wishlist");
        }
        &self.wishlist
    }
}

impl std::fmt::Debug for WishlistStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WishlistStore")
            .field("wishlist", &self.wishlist)
            .finish()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use storefront_core::Money;

    fn product(id: &str) -> Product {
        Product::new(id, format!("Product {id}"), Money::from_cents(500))
    }

    #[test]
    fn test_toggle_persists_both_ways() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = WishlistStore::load(storage.clone());

        assert!(store.toggle(&product("1")));
        assert!(WishlistStore::load(storage.clone()).contains("1"));

        assert!(!store.toggle(&product("1")));
        assert!(!WishlistStore::load(storage).contains("1"));
    }

    #[test]
    fn test_persisted_as_product_array() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = WishlistStore::load(storage.clone());
        store.add_item(&product("1"));
        store.add_item(&product("2"));
        store.add_item(&product("1"));

        let raw = storage.read(WISHLIST_STORAGE_KEY).unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();

        let ids: Vec<&str> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn test_remove_and_clear() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = WishlistStore::load(storage.clone());
        store.add_item(&product("1"));
        store.add_item(&product("2"));

        assert_eq!(store.remove_item("1").len(), 1);
        store.remove_item("missing");
        assert_eq!(store.wishlist().len(), 1);

        store.clear();
        assert!(WishlistStore::load(storage).wishlist().is_empty());
    }

    #[test]
    fn test_non_array_snapshot_starts_empty() {
        let storage = Arc::new(MemoryStorage::new());
        storage.write(WISHLIST_STORAGE_KEY, r#"{"0":{}}"#).unwrap();

        assert!(WishlistStore::load(storage).wishlist().is_empty());
    }
}
