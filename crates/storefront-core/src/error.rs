//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  storefront-core errors (this file)                                    │
//! │  ├── CoreError        - Business rule violations                       │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  storefront-store errors (separate crate)                              │
//! │  └── StoreError       - Snapshot storage failures (logged, not raised) │
//! │                                                                         │
//! │  App errors                                                            │
//! │  └── ApiError         - What the client sees (serialized)              │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Client                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cart and wishlist commands themselves never fail: unknown ids are
//! no-ops. These errors come from the edges (catalog lookups, checkout,
//! user-supplied filter input).

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Business rule errors raised at the command boundary.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product id is not in the loaded catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Product cannot be added to the cart.
    ///
    /// ## User Workflow
    /// ```text
    /// Product card shows "Out of Stock"
    ///      │
    ///      ▼
    /// add_to_cart("4")
    ///      │
    ///      ▼
    /// OutOfStock { name: "Organic Coffee Beans" }
    /// ```
    #[error("{name} is out of stock")]
    OutOfStock { name: String },

    /// Checkout was attempted with nothing in the cart.
    #[error("Cannot place an order with an empty cart")]
    EmptyCart,

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: f64, max: f64 },

    /// Lower bound of a range is above its upper bound.
    #[error("{field} minimum {min} is greater than maximum {max}")]
    InvalidRange { field: String, min: i64, max: i64 },
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::OutOfStock {
            name: "Organic Coffee Beans".to_string(),
        };
        assert_eq!(err.to_string(), "Organic Coffee Beans is out of stock");

        let err = ValidationError::InvalidRange {
            field: "price range".to_string(),
            min: 500,
            max: 100,
        };
        assert_eq!(
            err.to_string(),
            "price range minimum 500 is greater than maximum 100"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "id".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
