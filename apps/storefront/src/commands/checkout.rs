//! # Checkout Commands
//!
//! Order summary and mock order placement. No payment is taken and no
//! order is stored; placing an order confirms it and empties the cart.
//!
//! ## Place Order Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  place_order(config, cart, request)                                     │
//! │       │                                                                 │
//! │       ├── cart empty? ─────────────────────► CHECKOUT_ERROR             │
//! │       ├── required shipping field blank? ──► VALIDATION_ERROR           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  OrderSummary::for_cart (subtotal, shipping, 8% tax, total)             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  OrderConfirmation { orderId: UUID v4, placedAt: UTC now, ... }         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CartStore::clear (persisted)                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use storefront_core::{CartLineItem, CoreError, OrderSummary, ValidationError};
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::StorefrontConfig;
use crate::error::ApiResult;
use crate::state::CartState;

/// How the shopper chose to pay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Card,
    Paypal,
    Apple,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    #[serde(default = "default_country")]
    pub country: String,
}

fn default_country() -> String {
    "United States".to_string()
}

impl ShippingAddress {
    /// Every field of the shipping form is required.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let fields = [
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("address", &self.address),
            ("city", &self.city),
            ("state", &self.state),
            ("zipCode", &self.zip_code),
            ("country", &self.country),
        ];

        match fields.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((field, _)) => Err(ValidationError::Required {
                field: field.to_string(),
            }),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    pub shipping: ShippingAddress,
    #[serde(default)]
    pub payment_method: PaymentMethod,
}

/// Order summary with display strings in the configured currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummaryResponse {
    #[serde(flatten)]
    pub summary: OrderSummary,
    pub free_shipping: bool,
    pub formatted_total: String,
}

impl OrderSummaryResponse {
    fn new(config: &StorefrontConfig, summary: OrderSummary) -> Self {
        OrderSummaryResponse {
            free_shipping: summary.is_free_shipping(),
            formatted_total: config.format_currency(summary.total),
            summary,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    pub order_id: Uuid,
    pub placed_at: DateTime<Utc>,
    pub items: Vec<CartLineItem>,
    pub summary: OrderSummaryResponse,
    pub shipping: ShippingAddress,
    pub payment_method: PaymentMethod,
}

/// Priced breakdown of the current cart.
pub fn get_order_summary(config: &StorefrontConfig, cart: &CartState) -> OrderSummaryResponse {
    debug!("get_order_summary command");
    let summary = cart.with_cart(|c| OrderSummary::for_cart(c, &config.checkout));
    OrderSummaryResponse::new(config, summary)
}

/// Confirms the order and clears the cart.
///
/// ## Errors
/// * `CHECKOUT_ERROR` - cart is empty
/// * `VALIDATION_ERROR` - a shipping field is blank
pub fn place_order(
    config: &StorefrontConfig,
    cart: &CartState,
    request: PlaceOrderRequest,
) -> ApiResult<OrderConfirmation> {
    debug!(payment_method = ?request.payment_method, "place_order command");

    request.shipping.validate().map_err(CoreError::from)?;

    // Priced and cleared under one lock.
    let (items, summary) = cart.with_store_mut(|store| {
        if store.cart().is_empty() {
            return Err(CoreError::EmptyCart);
        }
        let items = store.cart().items().to_vec();
        let summary = OrderSummary::for_cart(store.cart(), &config.checkout);
        store.clear();
        Ok((items, summary))
    })?;

    let confirmation = OrderConfirmation {
        order_id: Uuid::new_v4(),
        placed_at: Utc::now(),
        items,
        summary: OrderSummaryResponse::new(config, summary),
        shipping: request.shipping,
        payment_method: request.payment_method,
    };

    info!(
        order_id = %confirmation.order_id,
        lines = confirmation.items.len(),
        total = %confirmation.summary.formatted_total,
        "Order placed"
    );
    Ok(confirmation)
}

// =============================================================================
// Unit Tests
// =============================================================================
