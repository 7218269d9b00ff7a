//! # Cart Commands
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│ Checkout │────►│  Order   │       │
//! │  │  Cart    │     │          │     │  Page    │     │  Placed  │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                 │                              │
//! │                   add_to_cart       place_order                         │
//! │                   update_item       (checkout.rs)                       │
//! │                   remove_item                                           │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   clear_cart ──────────────────────►                   │
//! │                                                      (back to empty)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every mutating command persists the cart snapshot before returning.

use serde::{Deserialize, Serialize};
use storefront_core::{Cart, CartLineItem, CoreError, Money};
use tracing::debug;

use crate::error::ApiResult;
use crate::state::{CartState, CatalogState};

/// Cart response including items and totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartLineItem>,
    pub total: Money,

    /// Distinct products (header badge).
    pub item_count: usize,

    /// Sum of quantities ("3 items").
    pub total_quantity: u64,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            items: cart.items().to_vec(),
            total: cart.total(),
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
        }
    }
}

/// Gets the current cart contents.
pub fn get_cart(cart: &CartState) -> CartResponse {
    debug!("get_cart command");
    cart.with_cart(|c| CartResponse::from(c))
}

/// Adds one unit of a product to the cart.
///
/// ## Behavior
/// - If product already in cart: quantity increases by 1
/// - If product not in cart: appended with quantity 1
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Shopper clicks "Add to Cart" on a product card                         │
/// │                    │                                                    │
/// │                    ▼                                                    │
/// │  ┌────────────────────────────────────────────────────────────────┐    │
/// │  │  1. Look up product in the loaded catalog                      │    │
/// │  │  2. Reject if out of stock (button is disabled in the UI)      │    │
/// │  │  3. Cart::add_item, persist, return updated cart               │    │
/// │  └────────────────────────────────────────────────────────────────┘    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// ## Errors
/// * `NOT_FOUND` - unknown product id
/// * `OUT_OF_STOCK` - product is not in stock
pub fn add_to_cart(
    catalog: &CatalogState,
    cart: &CartState,
    product_id: &str,
) -> ApiResult<CartResponse> {
    debug!(product_id = %product_id, "add_to_cart command");

    let product = catalog.find(product_id)?;
    if !product.in_stock {
        return Err(CoreError::OutOfStock { name: product.name }.into());
    }

    Ok(cart.with_store_mut(|store| CartResponse::from(store.add_item(&product))))
}

/// Sets the quantity of a line item.
///
/// ## Behavior
/// - Quantity ≤ 0: removes the item
/// - Unknown id: no change
pub fn update_cart_item(cart: &CartState, product_id: &str, quantity: i64) -> CartResponse {
    debug!(product_id = %product_id, quantity = %quantity, "update_cart_item command");
    cart.with_store_mut(|store| CartResponse::from(store.update_quantity(product_id, quantity)))
}

/// Removes a line item. Unknown ids are a no-op.
pub fn remove_from_cart(cart: &CartState, product_id: &str) -> CartResponse {
    debug!(product_id = %product_id, "remove_from_cart command");
    cart.with_store_mut(|store| CartResponse::from(store.remove_item(product_id)))
}

/// Clears all items from the cart.
pub fn clear_cart(cart: &CartState) -> CartResponse {
    debug!("clear_cart command");
    cart.with_store_mut(|store| CartResponse::from(store.clear()))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{app_with, demo_app};
    use crate::error::ErrorCode;
    use storefront_core::Product;

    #[test]
    fn test_add_twice_then_remove() {
        let app = demo_app();

        add_to_cart(&app.catalog, &app.cart, "4").unwrap();
        let response = add_to_cart(&app.catalog, &app.cart, "4").unwrap();

        assert_eq!(response.item_count, 1);
        assert_eq!(response.total_quantity, 2);
        assert_eq!(response.total, Money::from_cents(4998));

        let response = remove_from_cart(&app.cart, "4");
        assert!(response.items.is_empty());
        assert_eq!(response.total, Money::zero());
    }

    #[test]
    fn test_unknown_product_rejected() {
        let app = demo_app();
        let err = add_to_cart(&app.catalog, &app.cart, "nope").unwrap_err();

        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(get_cart(&app.cart).item_count, 0);
    }

    #[test]
    fn test_out_of_stock_rejected() {
        let sold_out = Product::new("1", "Sold Out Lamp", Money::from_cents(4000)).with_stock(0);
        let app = app_with(vec![sold_out]);

        let err = add_to_cart(&app.catalog, &app.cart, "1").unwrap_err();

        assert_eq!(err.code, ErrorCode::OutOfStock);
        assert_eq!(err.message, "Sold Out Lamp is out of stock");
        assert!(get_cart(&app.cart).items.is_empty());
    }

    #[test]
    fn test_update_quantity_clamps() {
        let app = demo_app();
        add_to_cart(&app.catalog, &app.cart, "1").unwrap();
        add_to_cart(&app.catalog, &app.cart, "7").unwrap();

        let response = update_cart_item(&app.cart, "7", 3);
        assert_eq!(response.total, Money::from_cents(29999 + 3 * 3499));

        let response = update_cart_item(&app.cart, "1", -4);
        assert_eq!(response.item_count, 1);
        assert_eq!(response.items[0].id(), "7");

        let unchanged = update_cart_item(&app.cart, "missing", 2);
        assert_eq!(unchanged, response);
    }

    #[test]
    fn test_clear() {
        let app = demo_app();
        add_to_cart(&app.catalog, &app.cart, "2").unwrap();

        let response = clear_cart(&app.cart);
        assert_eq!(response.total_quantity, 0);
        assert_eq!(get_cart(&app.cart), response);
    }

    #[test]
    fn test_response_json_shape() {
        let app = demo_app();
        let json = serde_json::to_value(add_to_cart(&app.catalog, &app.cart, "3").unwrap()).unwrap();

        assert_eq!(json["total"], 89.99);
        assert_eq!(json["itemCount"], 1);
        assert_eq!(json["totalQuantity"], 1);
        assert_eq!(json["items"][0]["quantity"], 1);
        assert_eq!(json["items"][0]["name"], "Designer Backpack");
    }
}
