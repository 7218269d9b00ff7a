//! # Catalog Filter Pipeline
//!
//! Derives the visible product list from the full catalog, the shopper's
//! filter selections and an optional search query.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    filter_products()                                    │
//! │                                                                         │
//! │  all products                                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  1. search    name or any tag contains query (case-insensitive)         │
//! │       │       skipped when query is empty                               │
//! │       ▼                                                                 │
//! │  2. category  category ∈ selected (case-insensitive), if any selected   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  3. brand     brand ∈ selected (case-insensitive), if any selected      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  4. price     min ≤ price ≤ max (ALWAYS applied)                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  5. rating    rating ≥ min, if min > 0                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  6. sort      stable sort by SortMode                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  visible products (possibly empty, never an error)                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The pipeline is a pure function of its inputs. Re-run it whenever the
//! catalog, the query or any criterion changes.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::convert::Infallible;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::Product;
use crate::DEFAULT_MAX_PRICE_DOLLARS;

// =============================================================================
// Sort Mode
// =============================================================================

/// Ordering of the visible products.
///
/// Serialized with the values the sort dropdown uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum SortMode {
    /// Featured products first, catalog order otherwise.
    #[default]
    #[serde(rename = "featured")]
    FeaturedFirst,

    #[serde(rename = "price-low")]
    PriceAsc,

    #[serde(rename = "price-high")]
    PriceDesc,

    #[serde(rename = "rating")]
    RatingDesc,

    /// Shown as "Newest" in the dropdown, but orders alphabetically by name.
    /// Products carry no date to sort by.
    #[serde(rename = "newest")]
    NameAsc,
}

impl SortMode {
    pub const ALL: [SortMode; 5] = [
        SortMode::FeaturedFirst,
        SortMode::PriceAsc,
        SortMode::PriceDesc,
        SortMode::RatingDesc,
        SortMode::NameAsc,
    ];

    /// Dropdown value.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::FeaturedFirst => "featured",
            SortMode::PriceAsc => "price-low",
            SortMode::PriceDesc => "price-high",
            SortMode::RatingDesc => "rating",
            SortMode::NameAsc => "newest",
        }
    }

    /// Dropdown label.
    pub fn label(&self) -> &'static str {
        match self {
            SortMode::FeaturedFirst => "Featured",
            SortMode::PriceAsc => "Price: Low to High",
            SortMode::PriceDesc => "Price: High to Low",
            SortMode::RatingDesc => "Highest Rated",
            SortMode::NameAsc => "Newest",
        }
    }

    /// Stable-sorts `products` in place.
    pub fn sort(&self, products: &mut [Product]) {
        match self {
            SortMode::FeaturedFirst => products.sort_by_key(|p| !p.featured),
            SortMode::PriceAsc => products.sort_by_key(|p| p.price),
            SortMode::PriceDesc => products.sort_by(|a, b| b.price.cmp(&a.price)),
            SortMode::RatingDesc => products.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
            SortMode::NameAsc => products.sort_by(|a, b| compare_names(&a.name, &b.name)),
        }
    }
}

/// Unknown values fall back to the default ordering.
impl FromStr for SortMode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SortMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .unwrap_or_default())
    }
}

/// Case-insensitive first, so "apple" and "Apple" sit together.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

// =============================================================================
// Price Range
// =============================================================================

/// Inclusive price bounds. `min ≤ max` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPriceRange")]
pub struct PriceRange {
    min: Money,
    max: Money,
}

#[derive(Deserialize)]
struct RawPriceRange {
    min: Money,
    max: Money,
}

impl PriceRange {
    /// Creates a price range, rejecting `min > max`.
    pub fn new(min: Money, max: Money) -> Result<Self, ValidationError> {
        if min > max {
            return Err(ValidationError::InvalidRange {
                field: "price range".to_string(),
                min: min.cents(),
                max: max.cents(),
            });
        }
        Ok(PriceRange { min, max })
    }

    /// Creates a price range from whole-dollar slider positions.
    pub fn from_dollars(min: i64, max: i64) -> Result<Self, ValidationError> {
        PriceRange::new(Money::from_dollars(min), Money::from_dollars(max))
    }

    #[inline]
    pub fn min(&self) -> Money {
        self.min
    }

    #[inline]
    pub fn max(&self) -> Money {
        self.max
    }

    pub fn contains(&self, price: Money) -> bool {
        self.min <= price && price <= self.max
    }

    /// True when the range cuts into the $0 to $500 slider.
    ///
    /// A range wider than the slider filters nothing visible to the shopper
    /// and does not count.
    pub fn is_narrowed(&self) -> bool {
        self.min > Money::zero() || self.max < Money::from_dollars(DEFAULT_MAX_PRICE_DOLLARS)
    }
}

impl TryFrom<RawPriceRange> for PriceRange {
    type Error = ValidationError;

    fn try_from(raw: RawPriceRange) -> Result<Self, Self::Error> {
        PriceRange::new(raw.min, raw.max)
    }
}

/// The full slider range, $0 to $500.
impl Default for PriceRange {
    fn default() -> Self {
        PriceRange {
            min: Money::zero(),
            max: Money::from_dollars(DEFAULT_MAX_PRICE_DOLLARS),
        }
    }
}

// =============================================================================
// Filter Criteria
// =============================================================================

/// The shopper's combined filter and sort selections.
///
/// Category and brand selections are matched case-insensitively; the
/// `with_*`/`toggle_*` helpers store them lowercased, as the sidebar ids are.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    pub categories: BTreeSet<String>,
    pub brands: BTreeSet<String>,
    pub price_range: PriceRange,
    /// 0 disables the rating filter.
    pub min_rating: f32,
    pub sort: SortMode,
}

impl FilterCriteria {
    pub fn new() -> Self {
        FilterCriteria::default()
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.categories.insert(category.to_lowercase());
        self
    }

    pub fn with_brand(mut self, brand: &str) -> Self {
        self.brands.insert(brand.to_lowercase());
        self
    }

    pub fn with_price_range(mut self, price_range: PriceRange) -> Self {
        self.price_range = price_range;
        self
    }

    pub fn with_min_rating(mut self, min_rating: f32) -> Self {
        self.min_rating = min_rating;
        self
    }

    pub fn with_sort(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }

    /// Checks or unchecks a category box. Returns whether it is now selected.
    pub fn toggle_category(&mut self, category: &str) -> bool {
        toggle(&mut self.categories, category)
    }

    /// Checks or unchecks a brand box. Returns whether it is now selected.
    pub fn toggle_brand(&mut self, brand: &str) -> bool {
        toggle(&mut self.brands, brand)
    }

    /// Number of active filters, for the sidebar badge.
    ///
    /// Each selected category and brand counts once; a narrowed price range
    /// and a minimum rating count once each. Sorting is not a filter.
    pub fn active_filter_count(&self) -> usize {
        self.categories.len()
            + self.brands.len()
            + usize::from(self.price_range.is_narrowed())
            + usize::from(self.min_rating > 0.0)
    }

    /// "Clear all": drops every filter but keeps the chosen sort.
    pub fn reset(&mut self) {
        *self = FilterCriteria {
            sort: self.sort,
            ..FilterCriteria::default()
        };
    }
}

fn toggle(set: &mut BTreeSet<String>, value: &str) -> bool {
    let key = value.to_lowercase();
    if set.remove(&key) {
        false
    } else {
        set.insert(key);
        true
    }
}

// =============================================================================
// Pipeline
// =============================================================================

/// Runs the filter pipeline.
///
/// `query` of `None` or `Some("")` disables the search stage.
///
/// ## Example
/// ```rust
/// use storefront_core::catalog::{filter_products, FilterCriteria};
/// use storefront_core::money::Money;
/// use storefront_core::types::Product;
///
/// let products = vec![
///     Product::new("1", "Apple", Money::from_dollars(10)),
///     Product::new("2", "Banana", Money::from_dollars(50)).featured(true),
/// ];
///
/// let visible = filter_products(&products, &FilterCriteria::default(), None);
/// assert_eq!(visible[0].name, "Banana");
/// ```
pub fn filter_products(
    products: &[Product],
    criteria: &FilterCriteria,
    query: Option<&str>,
) -> Vec<Product> {
    let query = query.filter(|q| !q.is_empty()).map(str::to_lowercase);
    let categories = lowercased(&criteria.categories);
    let brands = lowercased(&criteria.brands);

    let mut visible: Vec<Product> = products
        .iter()
        .filter(|p| query.as_deref().map_or(true, |q| p.matches_query(q)))
        .filter(|p| categories.is_empty() || categories.contains(&p.category.to_lowercase()))
        .filter(|p| brands.is_empty() || brands.contains(&p.brand.to_lowercase()))
        .filter(|p| criteria.price_range.contains(p.price))
        .filter(|p| criteria.min_rating <= 0.0 || p.rating >= criteria.min_rating)
        .cloned()
        .collect();

    criteria.sort.sort(&mut visible);
    visible
}

fn lowercased(set: &BTreeSet<String>) -> BTreeSet<String> {
    set.iter().map(|s| s.to_lowercase()).collect()
}

// =============================================================================
// Facets
// =============================================================================

/// One checkbox in the filter sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Facet {
    /// Lowercased value, the key stored in `FilterCriteria`.
    pub id: String,
    /// Display name as first seen in the catalog.
    pub name: String,
    pub count: usize,
}

/// Category and brand checkboxes with product counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CatalogFacets {
    pub categories: Vec<Facet>,
    pub brands: Vec<Facet>,
}

impl CatalogFacets {
    /// Counts categories and brands in first-seen order.
    pub fn from_products(products: &[Product]) -> Self {
        let mut facets = CatalogFacets::default();
        for product in products {
            bump(&mut facets.categories, &product.category);
            bump(&mut facets.brands, &product.brand);
        }
        facets
    }
}

fn bump(facets: &mut Vec<Facet>, name: &str) {
    if name.is_empty() {
        return;
    }
    let id = name.to_lowercase();
    match facets.iter_mut().find(|facet| facet.id == id) {
        Some(facet) => facet.count += 1,
        None => facets.push(Facet {
            id,
            name: name.to_string(),
            count: 1,
        }),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
