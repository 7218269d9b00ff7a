//! # storefront-store: Snapshot Persistence for the Storefront
//!
//! This crate persists the cart and the wishlist to local key-value
//! storage. Every mutation writes the store's complete state as one JSON
//! snapshot; startup reads it back once.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront Data Flow                             │
//! │                                                                         │
//! │  Command (add_to_cart)                                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 storefront-store (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │  CartStore    │    │   snapshot    │    │   storage    │  │   │
//! │  │   │ WishlistStore │───►│ load / save   │───►│ Memory, File │  │   │
//! │  │   │ (cart.rs ...) │    │ (serde_json)  │    │ (trait)      │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │   <data dir>/cart.json        <data dir>/wishlist.json          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Policy
//! - Missing or malformed snapshots load as empty state (logged at `warn`)
//! - A failed write is logged at `error`; the in-memory state stays
//!   authoritative and the command still succeeds
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use storefront_core::{Money, Product};
//! use storefront_store::{CartStore, MemoryStorage};
//!
//! let storage = Arc::new(MemoryStorage::new());
//! let mut store = CartStore::load(storage.clone());
//! store.add_item(&Product::new("1", "Apple", Money::from_cents(1000)));
//!
//! // A new session sees the persisted cart
//! let reloaded = CartStore::load(storage);
//! assert_eq!(reloaded.cart().total().cents(), 1000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod snapshot;
pub mod storage;
pub mod wishlist;

// =============================================================================
// Re-exports
// =============================================================================

pub use cart::CartStore;
pub use error::{StoreError, StoreResult};
pub use snapshot::{load_snapshot, save_snapshot};
pub use storage::{FileStorage, MemoryStorage, SnapshotStorage};
pub use wishlist::WishlistStore;
