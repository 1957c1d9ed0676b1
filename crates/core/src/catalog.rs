//! Catalog filter and search predicates.
//!
//! Filtering is a single predicate pass over the product list; search is a
//! case-insensitive substring match on name or brand.

use crate::types::{Money, Product};

/// Filter criteria for the product grid.
///
/// Empty criteria match everything, so a default filter is the unfiltered
/// catalog. A brand of `"all"` (any case) also means "no brand filter",
/// matching the value the storefront's brand selector uses for its default
/// option.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub min_price: Option<Money>,
    pub max_price: Option<Money>,
    pub brand: Option<String>,
}

impl ProductFilter {
    /// Whether a product passes this filter.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(min) = self.min_price
            && product.price < min
        {
            return false;
        }
        if let Some(max) = self.max_price
            && product.price > max
        {
            return false;
        }
        if let Some(brand) = &self.brand
            && !brand.is_empty()
            && !brand.eq_ignore_ascii_case("all")
            && !product.brand.eq_ignore_ascii_case(brand)
        {
            return false;
        }
        true
    }
}

/// Whether a product matches a search query.
///
/// Blank queries match everything; otherwise the query must appear in the
/// name or brand, ignoring case.
#[must_use]
pub fn matches_query(product: &Product, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    product.name.to_lowercase().contains(&query) || product.brand.to_lowercase().contains(&query)
}
