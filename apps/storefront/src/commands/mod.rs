//! # Commands Module
//!
//! Every operation the storefront client can invoke.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── product.rs   ◄─── Catalog listing, detail, facets
//! ├── cart.rs      ◄─── Cart manipulation
//! ├── wishlist.rs  ◄─── Saved-for-later products
//! └── checkout.rs  ◄─── Order summary and placement
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Client                                                                 │
//! │  ──────                                                                 │
//! │  add_to_cart(&app.catalog, &app.cart, "4")                              │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Rust Backend                                                           │
//! │  ────────────                                                           │
//! │  pub fn add_to_cart(                                                    │
//! │      catalog: &CatalogState,  ◄── Only the state it needs               │
//! │      cart: &CartState,                                                  │
//! │      product_id: &str,                                                  │
//! │  ) -> ApiResult<CartResponse>                                           │
//! │         │                                                               │
//! │         │ (JSON serialization, camelCase)                               │
//! │         ▼                                                               │
//! │  Client receives: { items, total, itemCount, totalQuantity }            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the catalog
//! fn list_products(catalog: &CatalogState, ...)
//!
//! // Only needs the cart
//! fn get_cart(cart: &CartState)
//!
//! // Needs both
//! fn add_to_cart(catalog: &CatalogState, cart: &CartState, ...)
//! ```

pub mod cart;
pub mod checkout;
pub mod product;
pub mod wishlist;
