//! # State Module
//!
//! Session state for the storefront, owned by one [`AppState`] built at
//! startup and handed to commands by reference. No globals.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         AppState                                        │
//! │                                                                         │
//! │  ┌──────────────────┐ ┌──────────────────┐ ┌──────────────────────┐   │
//! │  │    CartState     │ │  WishlistState   │ │    CatalogState      │   │
//! │  │                  │ │                  │ │                      │   │
//! │  │  • CartStore     │ │  • WishlistStore │ │  • Loaded products   │   │
//! │  │  • "cart" key    │ │  • "wishlist"    │ │  • None until fetch  │   │
//! │  └────────┬─────────┘ └────────┬─────────┘ └──────────────────────┘   │
//! │           │                    │                                        │
//! │           └─────────┬──────────┘                                        │
//! │                     ▼                                                   │
//! │          Arc<dyn SnapshotStorage>  (one per session)                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each state type keeps its own lock, so cart commands never wait on the
//! wishlist and vice versa.

mod cart;
mod catalog;
mod wishlist;

pub use cart::CartState;
pub use catalog::CatalogState;
pub use wishlist::WishlistState;

use std::sync::Arc;

use storefront_store::{FileStorage, SnapshotStorage};
use tracing::info;

use crate::catalog::{fetch_valid_products, CatalogSource};
use crate::config::StorefrontConfig;
use crate::error::ApiResult;

/// Composition root for one storefront session.
#[derive(Debug)]
pub struct AppState {
    pub config: StorefrontConfig,
    pub cart: CartState,
    pub wishlist: WishlistState,
    pub catalog: CatalogState,
}

impl AppState {
    /// Builds state persisted as files under `config.data_dir`.
    pub fn new(config: StorefrontConfig) -> Self {
        let storage = Arc::new(FileStorage::new(config.data_dir.clone()));
        Self::with_storage(config, storage)
    }

    /// Builds state over an arbitrary storage backend.
    pub fn with_storage(config: StorefrontConfig, storage: Arc<dyn SnapshotStorage>) -> Self {
        let cart = CartState::load(storage.clone());
        let wishlist = WishlistState::load(storage);

        AppState {
            config,
            cart,
            wishlist,
            catalog: CatalogState::new(),
        }
    }

    /// Fetches the product list and makes it visible to commands.
    ///
    /// Returns the number of products loaded.
    pub async fn load_catalog(&self, source: &dyn CatalogSource) -> ApiResult<usize> {
        let products = fetch_valid_products(source).await?;
        let count = products.len();
        self.catalog.replace(products);

        info!(products = count, "Catalog loaded");
        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use storefront_core::{Money, Product};

    use crate::catalog::MockCatalog;
    use crate::config::ENV_DATA_DIR;

    fn config_in(dir: &std::path::Path) -> StorefrontConfig {
        let dir = dir.display().to_string();
        StorefrontConfig::from_lookup(|key| (key == ENV_DATA_DIR).then(|| dir.clone())).unwrap()
    }

    #[tokio::test]
    async fn test_load_catalog_skips_invalid() {
        let tmp = tempfile::tempdir().unwrap();
        let app = AppState::new(config_in(tmp.path()));

        let mut bad = Product::new("2", "Bad", Money::from_cents(100));
        bad.price = Money::from_cents(-1);
        let source = MockCatalog::with_products(
            Duration::ZERO,
            vec![Product::new("1", "Good", Money::from_cents(100)), bad],
        );

        assert_eq!(app.load_catalog(&source).await.unwrap(), 1);
        assert!(app.catalog.is_loaded());
    }

    #[tokio::test]
    async fn test_session_survives_restart() {
        let tmp = tempfile::tempdir().unwrap();
        let source = MockCatalog::new(Duration::ZERO);

        {
            let app = AppState::new(config_in(tmp.path()));
            app.load_catalog(&source).await.unwrap();
            let product = app.catalog.find("1").unwrap();
            app.cart.with_store_mut(|store| {
                store.add_item(&product);
            });
            app.wishlist.with_store_mut(|store| store.toggle(&product));
        }

        let app = AppState::new(config_in(tmp.path()));

        assert_eq!(app.cart.with_cart(|cart| cart.total()), Money::from_cents(29999));
        assert!(app.wishlist.with_wishlist(|w| w.contains("1")));
        assert!(tmp.path().join("cart.json").exists());
        assert!(tmp.path().join("wishlist.json").exists());
    }
}
