//! # Catalog Source
//!
//! Where the product list comes from. The filter pipeline only needs a
//! `Vec<Product>`; anything that can deliver one can stand behind
//! [`CatalogSource`].
//!
//! ## Load Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  AppState::load_catalog                                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  source.fetch_products()    MockCatalog: sleep(delay), then 8 products  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_product() each    invalid entries skipped with warn!          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CatalogState::replace(products)                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Duration;

use async_trait::async_trait;
use storefront_core::validation::validate_product;
use storefront_core::{Money, Product};
use tracing::{debug, warn};

use crate::error::ApiResult;

/// One-shot supplier of the full product list.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_products(&self) -> ApiResult<Vec<Product>>;
}

/// Fetches from `source` and drops entries that fail validation.
pub async fn fetch_valid_products(source: &dyn CatalogSource) -> ApiResult<Vec<Product>> {
    let fetched = source.fetch_products().await?;
    let total = fetched.len();

    let products: Vec<Product> = fetched
        .into_iter()
        .filter(|product| match validate_product(product) {
            Ok(()) => true,
            Err(err) => {
                warn!(product_id = %product.id, error = %err, "Skipping invalid catalog entry");
                false
            }
        })
        .collect();

    debug!(fetched = total, kept = products.len(), "Catalog validated");
    Ok(products)
}

// =============================================================================
// Mock Catalog
// =============================================================================

/// Static product list delivered after an artificial delay.
#[derive(Debug, Clone)]
pub struct MockCatalog {
    delay: Duration,
    products: Vec<Product>,
}

impl MockCatalog {
    /// The built-in eight-product demo catalog.
    pub fn new(delay: Duration) -> Self {
        MockCatalog {
            delay,
            products: demo_products(),
        }
    }

    /// A mock serving `products` instead of the demo catalog.
    pub fn with_products(delay: Duration, products: Vec<Product>) -> Self {
        MockCatalog { delay, products }
    }
}

#[async_trait]
impl CatalogSource for MockCatalog {
    async fn fetch_products(&self) -> ApiResult<Vec<Product>> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(self.products.clone())
    }
}

#[allow(clippy::too_many_arguments)]
fn demo_product(
    id: &str,
    name: &str,
    description: &str,
    (price, original_price): (i64, i64),
    (category, brand): (&str, &str),
    (rating, review_count): (f32, u32),
    stock_count: u32,
    tags: [&str; 5],
    featured: bool,
) -> Product {
    let mut product = Product::new(id, name, Money::from_cents(price))
        .with_original_price(Money::from_cents(original_price))
        .with_category(category)
        .with_brand(brand)
        .with_rating(rating)
        .with_stock(stock_count)
        .with_tags(tags)
        .featured(featured);

    product.description = description.to_string();
    product.review_count = review_count;
    product.image = "/placeholder.svg?height=300&width=300".to_string();
    product.images = vec![product.image.clone()];
    product
}

/// The demo catalog, in display order.
pub fn demo_products() -> Vec<Product> {
    vec![
        demo_product(
            "1",
            "Premium Wireless Headphones",
            "High-quality wireless headphones with noise cancellation and premium sound quality",
            (29999, 39999),
            ("Electronics", "TechBrand"),
            (4.8, 124),
            15,
            ["wireless", "premium", "noise-cancelling", "headphones", "audio"],
            true,
        ),
        demo_product(
            "2",
            "Smart Fitness Watch",
            "Advanced fitness tracking with heart rate monitoring and GPS",
            (19999, 24999),
            ("Electronics", "FitTech"),
            (4.6, 89),
            8,
            ["fitness", "smart", "health", "watch", "wearable"],
            true,
        ),
        demo_product(
            "3",
            "Designer Backpack",
            "Stylish and functional backpack perfect for work and travel",
            (8999, 11999),
            ("Fashion", "StyleCo"),
            (4.7, 156),
            25,
            ["fashion", "backpack", "designer", "travel", "bag"],
            true,
        ),
        demo_product(
            "4",
            "Organic Coffee Beans",
            "Premium organic coffee beans sourced from sustainable farms",
            (2499, 2999),
            ("Food", "BrewMaster"),
            (4.9, 203),
            50,
            ["organic", "coffee", "premium", "food", "beverage"],
            true,
        ),
        demo_product(
            "5",
            "Wireless Gaming Mouse",
            "High-precision gaming mouse with customizable RGB lighting",
            (7999, 9999),
            ("Electronics", "GameTech"),
            (4.5, 67),
            12,
            ["gaming", "wireless", "rgb", "mouse", "computer"],
            false,
        ),
        demo_product(
            "6",
            "Yoga Mat Premium",
            "Non-slip yoga mat made from eco-friendly materials",
            (4999, 6999),
            ("Sports", "ZenFit"),
            (4.4, 92),
            30,
            ["yoga", "fitness", "eco-friendly", "exercise", "mat"],
            false,
        ),
        demo_product(
            "7",
            "Stainless Steel Water Bottle",
            "Insulated water bottle that keeps drinks cold for 24 hours",
            (3499, 4499),
            ("Sports", "HydroLife"),
            (4.7, 118),
            45,
            ["hydration", "eco-friendly", "sports", "bottle", "stainless-steel"],
            false,
        ),
        demo_product(
            "8",
            "Leather Wallet",
            "Genuine leather wallet with RFID protection",
            (5999, 7999),
            ("Fashion", "StyleCo"),
            (4.6, 85),
            20,
            ["leather", "wallet", "rfid", "fashion", "accessory"],
            false,
        ),
    ]
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog_is_valid() {
        let products = demo_products();

        assert_eq!(products.len(), 8);
        assert!(products.iter().all(|p| validate_product(p).is_ok()));
        assert!(products.iter().all(|p| p.in_stock));
        assert_eq!(products.iter().filter(|p| p.featured).count(), 4);
        assert_eq!(products[0].discount_percent(), 25);
    }

    #[tokio::test]
    async fn test_invalid_entries_are_skipped() {
        let mut broken = Product::new("9", "Broken", Money::from_cents(100));
        broken.rating = 7.5;
        let nameless = Product::new("10", "  ", Money::from_cents(100));

        let source = MockCatalog::with_products(
            Duration::ZERO,
            vec![Product::new("1", "Fine", Money::from_cents(100)), broken, nameless],
        );

        let products = fetch_valid_products(&source).await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, "1");
    }

    #[tokio::test(start_paused = true)]
    async fn test_mock_waits_for_delay() {
        let source = MockCatalog::new(Duration::from_millis(1000));
        let started = tokio::time::Instant::now();

        let products = source.fetch_products().await.unwrap();

        assert_eq!(products.len(), 8);
        assert!(started.elapsed() >= Duration::from_millis(1000));
    }
}
