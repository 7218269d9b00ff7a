//! # API Error Type
//!
//! Unified error type for storefront commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow                                           │
//! │                                                                         │
//! │  storefront-core                  Command Layer             Client      │
//! │  ───────────────                  ─────────────             ──────      │
//! │                                                                         │
//! │  CoreError::ProductNotFound ─┐                                          │
//! │  CoreError::OutOfStock      ─┼──► ApiError { code, message } ──► JSON   │
//! │  CoreError::EmptyCart       ─┤                                          │
//! │  ValidationError            ─┘                                          │
//! │                                                                         │
//! │  StoreError never reaches this layer: failed writes are logged by       │
//! │  the stores and the command still succeeds.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use storefront_core::CoreError;

/// API error returned from commands.
///
/// ## Serialization
/// This is what the client receives when a command fails:
/// ```json
/// {
///   "code": "OUT_OF_STOCK",
///   "message": "Organic Coffee Beans is out of stock"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
///
/// ## Usage in Client
/// ```typescript
/// try {
///   await invoke('add_to_cart', { productId });
/// } catch (e) {
///   switch (e.code) {
///     case 'OUT_OF_STOCK':
///       toast('This item is currently unavailable');
///       break;
///     case 'NOT_FOUND':
///       router.push('/products');
///       break;
///   }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found (404)
    NotFound,

    /// Input validation failed (400)
    ValidationError,

    /// Product is not purchasable right now
    OutOfStock,

    /// Checkout could not proceed
    CheckoutError,

    /// Catalog not loaded yet
    Unavailable,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", &id),
            CoreError::OutOfStock { .. } => ApiError::new(ErrorCode::OutOfStock, err.to_string()),
            CoreError::EmptyCart => ApiError::new(ErrorCode::CheckoutError, err.to_string()),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Result type for commands.
pub type ApiResult<T> = Result<T, ApiError>;

// =============================================================================
// Unit Tests
// =============================================================================
