//! # Domain Types
//!
//! Catalog types shared by the cart, the wishlist and the filter pipeline.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐              ┌─────────────────┐              │
//! │  │      Product        │              │    TaxRate      │              │
//! │  │  ─────────────────  │              │  ─────────────  │              │
//! │  │  id (unique)        │              │  bps (u32)      │              │
//! │  │  name, description  │              │  800 = 8%       │              │
//! │  │  price, originalPr. │              └─────────────────┘              │
//! │  │  category, brand    │                                               │
//! │  │  rating, reviews    │   Created by the catalog source,              │
//! │  │  stock, tags        │   NEVER mutated by the client.                │
//! │  │  featured           │                                               │
//! │  └─────────────────────┘                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// 1 basis point = 0.01%, so 800 bps = 8%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }
}

// =============================================================================
// Product
// =============================================================================

/// A catalog entry.
///
/// ## JSON Shape
/// Field names are camelCase so persisted snapshots and client payloads
/// read `originalPrice`, `reviewCount`, `inStock`, `stockCount`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Unique identifier.
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Current selling price.
    pub price: Money,

    /// Pre-sale price, shown struck through.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub original_price: Option<Money>,

    /// Primary image URL.
    #[serde(default)]
    pub image: String,

    /// Gallery image URLs.
    #[serde(default)]
    pub images: Vec<String>,

    pub category: String,

    pub brand: String,

    /// Average review score, 0 to 5.
    pub rating: f32,

    #[serde(default)]
    pub review_count: u32,

    pub in_stock: bool,

    #[serde(default)]
    pub stock_count: u32,

    #[serde(default)]
    pub tags: Vec<String>,

    /// Featured products sort first in the default ordering.
    #[serde(default)]
    pub featured: bool,
}

impl Product {
    /// Creates an in-stock product with the given id, name and price.
    ///
    /// Remaining fields start empty; the `with_*` helpers fill them in.
    /// Mostly used by catalog fixtures and tests.
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: Money) -> Self {
        Product {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price,
            original_price: None,
            image: String::new(),
            images: Vec::new(),
            category: String::new(),
            brand: String::new(),
            rating: 0.0,
            review_count: 0,
            in_stock: true,
            stock_count: 0,
            tags: Vec::new(),
            featured: false,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    pub fn with_rating(mut self, rating: f32) -> Self {
        self.rating = rating;
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_original_price(mut self, original_price: Money) -> Self {
        self.original_price = Some(original_price);
        self
    }

    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    pub fn with_stock(mut self, stock_count: u32) -> Self {
        self.stock_count = stock_count;
        self.in_stock = stock_count > 0;
        self
    }

    /// Percentage saved against `original_price`, rounded to the nearest
    /// whole percent. Zero when there is no higher original price.
    ///
    /// ```rust
    /// use storefront_core::money::Money;
    /// use storefront_core::types::Product;
    ///
    /// let headphones = Product::new("1", "Headphones", Money::from_cents(29999))
    ///     .with_original_price(Money::from_cents(39999));
    /// assert_eq!(headphones.discount_percent(), 25);
    /// ```
    pub fn discount_percent(&self) -> u32 {
        match self.original_price {
            Some(original) if original > self.price && original.cents() > 0 => {
                let saved = (original - self.price).cents() as f64;
                (saved / original.cents() as f64 * 100.0).round() as u32
            }
            _ => 0,
        }
    }

    /// Case-insensitive substring match against the name or any tag.
    ///
    /// `query` must already be lowercased.
    pub fn matches_query(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(query)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(query))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discount_percent() {
        let watch = Product::new("2", "Smart Fitness Watch", Money::from_cents(19999))
            .with_original_price(Money::from_cents(24999));
        assert_eq!(watch.discount_percent(), 20);

        let plain = Product::new("3", "Plain", Money::from_cents(1000));
        assert_eq!(plain.discount_percent(), 0);

        let marked_up = Product::new("4", "Odd", Money::from_cents(1000))
            .with_original_price(Money::from_cents(900));
        assert_eq!(marked_up.discount_percent(), 0);
    }

    #[test]
    fn test_matches_query_name_or_tag() {
        let mouse = Product::new("5", "Wireless Gaming Mouse", Money::from_cents(7999))
            .with_tags(["gaming", "RGB", "computer"]);

        assert!(mouse.matches_query("gaming mouse"));
        assert!(mouse.matches_query("rgb"));
        assert!(mouse.matches_query("comp"));
        assert!(!mouse.matches_query("keyboard"));
    }

    #[test]
    fn test_product_json_is_camel_case() {
        let product = Product::new("1", "Apple", Money::from_cents(1000))
            .with_original_price(Money::from_cents(1200))
            .with_stock(3);
        let json = serde_json::to_value(&product).unwrap();

        assert_eq!(json["price"], 10.0);
        assert_eq!(json["originalPrice"], 12.0);
        assert_eq!(json["stockCount"], 3);
        assert_eq!(json["inStock"], true);
        assert_eq!(json["reviewCount"], 0);
    }

    #[test]
    fn test_product_deserializes_without_optional_fields() {
        let json = r#"{
            "id": "7",
            "name": "Stainless Steel Water Bottle",
            "price": 34.99,
            "category": "Sports",
            "brand": "HydroLife",
            "rating": 4.7,
            "inStock": true
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(product.price, Money::from_cents(3499));
        assert_eq!(product.original_price, None);
        assert!(!product.featured);
        assert!(product.tags.is_empty());
    }
}
