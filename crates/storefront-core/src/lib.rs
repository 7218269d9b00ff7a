//! # storefront-core: Pure Business Logic for the Storefront
//!
//! This crate is the **heart** of the storefront. It contains the cart
//! reducer, the wishlist, the catalog filter pipeline and checkout math as
//! pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Client UI (catalog, cart, checkout)             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    apps/storefront                              │   │
//! │  │    list_products, add_to_cart, toggle_wishlist, place_order    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            ★ storefront-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   cart    │  │  catalog  │  │ checkout  │  │   │
//! │  │   │  Product  │  │   Cart    │  │  Filter   │  │  Order    │  │   │
//! │  │   │   Money   │  │ Wishlist  │  │  Sort     │  │  Summary  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              storefront-store (Snapshot Persistence)            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, TaxRate)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - Cart line items and the cart reducer
//! - [`wishlist`] - Saved-for-later products (set semantics)
//! - [`catalog`] - Filter criteria and the filter/sort pipeline
//! - [`checkout`] - Order summary (shipping, tax, grand total)
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::cart::Cart;
//! use storefront_core::money::Money;
//! use storefront_core::types::Product;
//!
//! let apple = Product::new("1", "Apple", Money::from_cents(1000));
//!
//! let mut cart = Cart::new();
//! cart.add_item(&apple);
//! cart.add_item(&apple);
//!
//! assert_eq!(cart.total().cents(), 2000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;
pub mod wishlist;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartAction, CartLineItem, CartSnapshot};
pub use catalog::{filter_products, CatalogFacets, FilterCriteria, PriceRange, SortMode};
pub use checkout::{CheckoutPolicy, OrderSummary};
pub use error::{CoreError, ValidationError};
pub use money::Money;
pub use types::*;
pub use wishlist::Wishlist;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Storage key of the persisted cart snapshot.
pub const CART_STORAGE_KEY: &str = "cart";

/// Storage key of the persisted wishlist snapshot.
pub const WISHLIST_STORAGE_KEY: &str = "wishlist";

/// Upper bound of the price slider, in whole dollars.
pub const DEFAULT_MAX_PRICE_DOLLARS: i64 = 500;

/// Highest possible product rating.
pub const MAX_RATING: f32 = 5.0;
