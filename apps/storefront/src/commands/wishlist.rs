//! # Wishlist Commands
//!
//! Heart icons on product cards call `toggle_wishlist`; the wishlist page
//! uses the rest.

use serde::Serialize;
use storefront_core::{Product, Wishlist};
use tracing::debug;

use crate::error::ApiResult;
use crate::state::{CatalogState, WishlistState};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistResponse {
    pub items: Vec<Product>,
    pub count: usize,
}

impl From<&Wishlist> for WishlistResponse {
    fn from(wishlist: &Wishlist) -> Self {
        WishlistResponse {
            items: wishlist.items().to_vec(),
            count: wishlist.len(),
        }
    }
}

/// Result of a heart-icon click.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleResponse {
    /// Whether the product is saved after the click.
    pub saved: bool,
    pub wishlist: WishlistResponse,
}

pub fn get_wishlist(wishlist: &WishlistState) -> WishlistResponse {
    debug!("get_wishlist command");
    wishlist.with_wishlist(|w| WishlistResponse::from(w))
}

/// Saves the product if absent, removes it if present.
///
/// ## Errors
/// * `NOT_FOUND` - unknown product id
pub fn toggle_wishlist(
    catalog: &CatalogState,
    wishlist: &WishlistState,
    product_id: &str,
) -> ApiResult<ToggleResponse> {
    debug!(product_id = %product_id, "toggle_wishlist command");

    let product = catalog.find(product_id)?;
    Ok(wishlist.with_store_mut(|store| {
        let saved = store.toggle(&product);
        ToggleResponse {
            saved,
            wishlist: WishlistResponse::from(store.wishlist()),
        }
    }))
}

/// Saves a product. Already-saved products are left as they are.
///
/// Out-of-stock products can be saved.
pub fn add_to_wishlist(
    catalog: &CatalogState,
    wishlist: &WishlistState,
    product_id: &str,
) -> ApiResult<WishlistResponse> {
    debug!(product_id = %product_id, "add_to_wishlist command");

    let product = catalog.find(product_id)?;
    Ok(wishlist.with_store_mut(|store| WishlistResponse::from(store.add_item(&product))))
}

pub fn remove_from_wishlist(wishlist: &WishlistState, product_id: &str) -> WishlistResponse {
    debug!(product_id = %product_id, "remove_from_wishlist command");
    wishlist.with_store_mut(|store| WishlistResponse::from(store.remove_item(product_id)))
}

pub fn is_in_wishlist(wishlist: &WishlistState, product_id: &str) -> bool {
    wishlist.with_wishlist(|w| w.contains(product_id))
}

pub fn clear_wishlist(wishlist: &WishlistState) -> WishlistResponse {
    debug!("clear_wishlist command");
    wishlist.with_store_mut(|store| WishlistResponse::from(store.clear()))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::cart::{add_to_cart, get_cart};
    use crate::commands::test_support::demo_app;
    use crate::error::ErrorCode;

    #[test]
    fn test_toggle_twice_restores() {
        let app = demo_app();
        add_to_wishlist(&app.catalog, &app.wishlist, "2").unwrap();
        let before = get_wishlist(&app.wishlist);

        let first = toggle_wishlist(&app.catalog, &app.wishlist, "5").unwrap();
        assert!(first.saved);
        assert!(is_in_wishlist(&app.wishlist, "5"));

        let second = toggle_wishlist(&app.catalog, &app.wishlist, "5").unwrap();
        assert!(!second.saved);
        assert_eq!(second.wishlist, before);
    }

    #[test]
    fn test_add_is_idempotent() {
        let app = demo_app();
        add_to_wishlist(&app.catalog, &app.wishlist, "6").unwrap();
        let response = add_to_wishlist(&app.catalog, &app.wishlist, "6").unwrap();

        assert_eq!(response.count, 1);
    }

    #[test]
    fn test_unknown_product_rejected() {
        let app = demo_app();
        let err = toggle_wishlist(&app.catalog, &app.wishlist, "42").unwrap_err();

        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(get_wishlist(&app.wishlist).count, 0);
    }

    #[test]
    fn test_remove_and_clear() {
        let app = demo_app();
        add_to_wishlist(&app.catalog, &app.wishlist, "1").unwrap();
        add_to_wishlist(&app.catalog, &app.wishlist, "8").unwrap();

        let response = remove_from_wishlist(&app.wishlist, "1");
        assert_eq!(response.items[0].id, "8");
        assert_eq!(remove_from_wishlist(&app.wishlist, "1"), response);

        assert_eq!(clear_wishlist(&app.wishlist).count, 0);
        assert!(!is_in_wishlist(&app.wishlist, "8"));
    }

    #[test]
    fn test_wishlist_to_cart_keeps_wishlist() {
        let app = demo_app();
        add_to_wishlist(&app.catalog, &app.wishlist, "3").unwrap();

        add_to_cart(&app.catalog, &app.cart, "3").unwrap();

        assert!(is_in_wishlist(&app.wishlist, "3"));
        assert_eq!(get_cart(&app.cart).item_count, 1);
    }
}
