//! # Product Commands
//!
//! Catalog listing, product detail and the filter sidebar.
//!
//! ## Listing Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product Listing Flow                                 │
//! │                                                                         │
//! │  Shopper types "wireless", ticks Electronics, drags price to $0-$200    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  list_products(catalog, Some("wireless"), &criteria)                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌───────────────────────────────────────────┐                         │
//! │  │  validate: query ≤ 100 chars (trimmed)    │──► VALIDATION_ERROR     │
//! │  │            min rating within 0-5          │                         │
//! │  └───────────────────────────────────────────┘                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  filter_products(): search → category → brand → price → rating → sort  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ProductListResponse { products, totalCount, activeFilterCount }        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Instant;

use serde::{Deserialize, Serialize};
use storefront_core::validation::{validate_min_rating, validate_search_query};
use storefront_core::{filter_products, CatalogFacets, CoreError, FilterCriteria, Product, SortMode};
use tracing::debug;

use crate::error::ApiResult;
use crate::state::CatalogState;

/// A product as shown on a card or detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    #[serde(flatten)]
    pub product: Product,

    /// Percent off `originalPrice`, for the sale badge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_percent: Option<u32>,
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        let discount = product.discount_percent();
        ProductDto {
            product,
            discount_percent: (discount > 0).then_some(discount),
        }
    }
}

/// Result of a catalog listing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListResponse {
    pub products: Vec<ProductDto>,

    /// Number of products shown ("8 products found").
    pub total_count: usize,

    /// Badge on the "Filters" button.
    pub active_filter_count: usize,
}

/// One entry of the sort dropdown.
#[derive(Debug, Clone, Serialize)]
pub struct SortOption {
    pub value: SortMode,
    pub label: &'static str,
}

/// Lists the visible products for a search query and filter selection.
///
/// ## Arguments
/// * `query` - Free-text search over names and tags (optional)
/// * `criteria` - Category, brand, price, rating and sort selections
///
/// ## Errors
/// * `VALIDATION_ERROR` for an over-long query or an out-of-range rating
/// * `UNAVAILABLE` while the catalog is still loading
pub fn list_products(
    catalog: &CatalogState,
    query: Option<&str>,
    criteria: &FilterCriteria,
) -> ApiResult<ProductListResponse> {
    let start = Instant::now();
    let query = query
        .map(validate_search_query)
        .transpose()
        .map_err(CoreError::from)?;
    validate_min_rating(criteria.min_rating).map_err(CoreError::from)?;

    let visible = catalog.with_products(|products| {
        filter_products(products, criteria, query.as_deref())
    })?;

    debug!(
        query = query.as_deref().unwrap_or(""),
        sort = criteria.sort.as_str(),
        results = visible.len(),
        elapsed_us = start.elapsed().as_micros() as u64,
        "list_products command"
    );

    Ok(ProductListResponse {
        total_count: visible.len(),
        active_filter_count: criteria.active_filter_count(),
        products: visible.into_iter().map(ProductDto::from).collect(),
    })
}

/// Gets a single product by id.
///
/// ## Errors
/// * `NOT_FOUND` if the id is not in the catalog
pub fn get_product(catalog: &CatalogState, id: &str) -> ApiResult<ProductDto> {
    debug!(id = %id, "get_product command");
    catalog.find(id).map(ProductDto::from)
}

/// Category and brand checkboxes with counts over the whole catalog.
pub fn get_facets(catalog: &CatalogState) -> ApiResult<CatalogFacets> {
    debug!("get_facets command");
    catalog.with_products(CatalogFacets::from_products)
}

/// Sort dropdown entries, default first.
pub fn get_sort_options() -> Vec<SortOption> {
    SortMode::ALL
        .iter()
        .map(|mode| SortOption {
            value: *mode,
            label: mode.label(),
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{app_with, demo_app};
    use crate::error::ErrorCode;
    use crate::state::CatalogState;
    use storefront_core::{Money, PriceRange};

    fn names(response: &ProductListResponse) -> Vec<&str> {
        response
            .products
            .iter()
            .map(|dto| dto.product.name.as_str())
            .collect()
    }

    #[test]
    fn test_default_listing_puts_featured_first() {
        let app = demo_app();
        let response = list_products(&app.catalog, None, &FilterCriteria::default()).unwrap();

        assert_eq!(response.total_count, 8);
        assert_eq!(response.active_filter_count, 0);
        assert!(response.products[..4].iter().all(|dto| dto.product.featured));
        assert!(response.products[4..].iter().all(|dto| !dto.product.featured));
    }

    #[test]
    fn test_search_matches_names_and_tags() {
        let app = demo_app();
        let response =
            list_products(&app.catalog, Some("  WIRELESS "), &FilterCriteria::default()).unwrap();

        assert_eq!(
            names(&response),
            vec!["Premium Wireless Headphones", "Wireless Gaming Mouse"]
        );

        let response =
            list_products(&app.catalog, Some("eco-friendly"), &FilterCriteria::default()).unwrap();
        assert_eq!(response.total_count, 2);
    }

    #[test]
    fn test_combined_filters() {
        let app = demo_app();
        let criteria = FilterCriteria::new()
            .with_category("electronics")
            .with_price_range(PriceRange::from_dollars(0, 250).unwrap())
            .with_sort(SortMode::PriceAsc);

        let response = list_products(&app.catalog, None, &criteria).unwrap();

        assert_eq!(
            names(&response),
            vec!["Wireless Gaming Mouse", "Smart Fitness Watch"]
        );
        assert_eq!(response.active_filter_count, 2);
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let app = demo_app();
        let response = list_products(&app.catalog, Some("submarine"), &FilterCriteria::default())
            .unwrap();

        assert!(response.products.is_empty());
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let app = demo_app();

        let long = "x".repeat(101);
        let err = list_products(&app.catalog, Some(&long), &FilterCriteria::default()).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let mut criteria = FilterCriteria::default();
        criteria.min_rating = 6.0;
        let err = list_products(&app.catalog, None, &criteria).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_listing_before_load_is_unavailable() {
        let err = list_products(&CatalogState::new(), None, &FilterCriteria::default()).unwrap_err();
        assert_eq!(err.code, ErrorCode::Unavailable);
    }

    #[test]
    fn test_get_product_and_discount() {
        let app = demo_app();

        let dto = get_product(&app.catalog, "1").unwrap();
        assert_eq!(dto.product.name, "Premium Wireless Headphones");
        assert_eq!(dto.discount_percent, Some(25));

        let err = get_product(&app.catalog, "99").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_dto_json_is_flat() {
        let app = app_with(vec![Product::new("1", "Mug", Money::from_cents(500))]);
        let json = serde_json::to_value(get_product(&app.catalog, "1").unwrap()).unwrap();

        assert_eq!(json["id"], "1");
        assert_eq!(json["price"], 5.0);
        assert!(json.get("discountPercent").is_none());
    }

    #[test]
    fn test_facets() {
        let app = demo_app();
        let facets = get_facets(&app.catalog).unwrap();

        let electronics = facets
            .categories
            .iter()
            .find(|facet| facet.id == "electronics")
            .unwrap();
        assert_eq!(electronics.count, 3);
        assert_eq!(facets.brands.len(), 7);
    }

    #[test]
    fn test_sort_options() {
        let options = get_sort_options();

        assert_eq!(options.len(), 5);
        assert_eq!(options[0].value, SortMode::default());
    }
}
