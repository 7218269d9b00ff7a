//! # Catalog State
//!
//! The product list the filter pipeline runs over. Empty and "not loaded"
//! until the catalog source answers; replaced wholesale afterwards.
//!
//! Reads vastly outnumber writes (one write per session), hence `RwLock`.

use std::sync::{Arc, PoisonError, RwLock};

use storefront_core::{CoreError, Product};

use crate::error::{ApiError, ApiResult, ErrorCode};

#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    products: Arc<RwLock<Option<Vec<Product>>>>,
}

impl CatalogState {
    pub fn new() -> Self {
        CatalogState::default()
    }

    pub fn is_loaded(&self) -> bool {
        self.products
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    pub fn replace(&self, products: Vec<Product>) {
        let mut guard = self.products.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Some(products);
    }

    /// Runs `f` over the loaded products.
    ///
    /// ## Errors
    /// `UNAVAILABLE` while the catalog is still loading.
    pub fn with_products<F, R>(&self, f: F) -> ApiResult<R>
    where
        F: FnOnce(&[Product]) -> R,
    {
        let guard = self.products.read().unwrap_or_else(PoisonError::into_inner);
        match guard.as_deref() {
            Some(products) => Ok(f(products)),
            None => Err(ApiError::new(
                ErrorCode::Unavailable,
                "Catalog is still loading",
            )),
        }
    }

    /// Looks up one product by id.
    pub fn find(&self, id: &str) -> ApiResult<Product> {
        self.with_products(|products| products.iter().find(|p| p.id == id).cloned())?
            .ok_or_else(|| CoreError::ProductNotFound(id.to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::Money;

    #[test]
    fn test_unavailable_until_replaced() {
        let state = CatalogState::new();
        assert!(!state.is_loaded());
        assert_eq!(
            state.with_products(|p| p.len()).unwrap_err().code,
            ErrorCode::Unavailable
        );

        state.replace(vec![Product::new("1", "Mug", Money::from_cents(100))]);

        assert!(state.is_loaded());
        assert_eq!(state.find("1").unwrap().name, "Mug");
        assert_eq!(state.find("2").unwrap_err().code, ErrorCode::NotFound);
    }
}
