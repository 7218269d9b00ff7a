//! # Validation Module
//!
//! Input validation for data entering the core from the edges: catalog
//! entries delivered by the catalog source and filter input typed by the
//! shopper.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Client UI                                                     │
//! │  ├── Slider bounds, star picker                                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Command (Rust)                                                │
//! │  ├── Type validation (deserialization)                                  │
//! │  └── THIS MODULE: query length, rating bounds, catalog sanity           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Core types                                                    │
//! │  └── PriceRange::new rejects min > max                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::validation::{validate_min_rating, validate_search_query};
//!
//! assert_eq!(validate_search_query("  Wireless ").unwrap(), "Wireless");
//! assert!(validate_min_rating(6.0).is_err());
//! ```

use crate::error::ValidationError;
use crate::types::Product;
use crate::MAX_RATING;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted search query.
pub const MAX_QUERY_LEN: usize = 100;

/// Validates a free-text search query.
///
/// ## Rules
/// - Can be empty (no search filter)
/// - Maximum 100 characters after trimming
///
/// ## Returns
/// The trimmed query string.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.chars().count() > MAX_QUERY_LEN {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: MAX_QUERY_LEN,
        });
    }

    Ok(query.to_string())
}

/// Validates a minimum-rating filter value (0 to 5 inclusive).
pub fn validate_min_rating(rating: f32) -> ValidationResult<()> {
    validate_rating("minimum rating", rating)
}

/// Validates a catalog entry before it reaches the filter pipeline.
///
/// ## Rules
/// - `id` and `name` must not be blank
/// - `price` (and `originalPrice`, if present) must be non-negative
/// - `rating` must be within 0 to 5
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    if product.id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    if product.name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    let prices = std::iter::once(product.price).chain(product.original_price);
    for price in prices {
        if price.is_negative() {
            return Err(ValidationError::OutOfRange {
                field: "price".to_string(),
                min: 0.0,
                max: i64::MAX as f64,
            });
        }
    }

    validate_rating("rating", product.rating)
}

fn validate_rating(field: &str, rating: f32) -> ValidationResult<()> {
    // NaN fails both comparisons
    if !(0.0..=MAX_RATING).contains(&rating) {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0.0,
            max: MAX_RATING as f64,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
