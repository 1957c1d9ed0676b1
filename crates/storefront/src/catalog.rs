//! Product catalog loading and queries.
//!
//! The catalog is operator-provided data: a JSON array of products loaded
//! once at startup. A missing file falls back to the built-in seed catalog
//! so a fresh checkout serves something; malformed data is a startup error,
//! unlike the cart's fail-soft load.

use std::path::Path;

use rust_decimal::Decimal;
use thiserror::Error;

use roastline_core::{Money, Product, ProductFilter, ProductId, catalog::matches_query};

/// Errors loading the catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Malformed catalog {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

/// The product catalog, immutable after startup.
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Load the catalog from a JSON file, falling back to the seed catalog
    /// when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the file exists but cannot be read or
    /// parsed.
    pub fn load_or_seed(path: &Path) -> Result<Self, CatalogError> {
        if !path.exists() {
            tracing::info!(path = %path.display(), "No catalog file, using built-in seed catalog");
            return Ok(Self {
                products: seed_products(),
            });
        }

        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let products =
            serde_json::from_str::<Vec<Product>>(&raw).map_err(|source| CatalogError::Parse {
                path: path.display().to_string(),
                source,
            })?;

        tracing::info!(path = %path.display(), count = products.len(), "Catalog loaded");
        Ok(Self { products })
    }

    /// Build a catalog directly from products (used by tests).
    #[must_use]
    pub fn from_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// All products in catalog order.
    #[must_use]
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn find(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// One predicate pass: filter criteria plus an optional search query.
    #[must_use]
    pub fn select(&self, filter: &ProductFilter, query: Option<&str>) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| filter.matches(p))
            .filter(|p| query.is_none_or(|q| matches_query(p, q)))
            .collect()
    }

    /// Distinct brand names in catalog order, for the brand selector.
    #[must_use]
    pub fn brands(&self) -> Vec<&str> {
        let mut brands: Vec<&str> = Vec::new();
        for product in &self.products {
            if !brands
                .iter()
                .any(|b| b.eq_ignore_ascii_case(&product.brand))
            {
                brands.push(&product.brand);
            }
        }
        brands
    }
}

/// The built-in seed catalog: the store's original eight coffee products.
#[must_use]
pub fn seed_products() -> Vec<Product> {
    let entries: [(&str, &str, &str, i64, i64); 8] = [
        (
            "1",
            "Coffee Beans - Espresso Arabica and Robusta Beans",
            "Lavazza",
            4_700,
            43,
        ),
        (
            "2",
            "Lavazza Coffee Blends - Try the Italian Espresso",
            "Lavazza",
            5_300,
            34,
        ),
        (
            "3",
            "Lavazza - Caffè Espresso Black Tin - Ground coffee",
            "welikecoffee",
            9_999,
            50,
        ),
        (
            "4",
            "Qualità Oro Mountain Grown - Espresso Coffee Beans",
            "Lavazza",
            3_865,
            44,
        ),
        (
            "5",
            "Coffee Beans - Espresso Arabica and Robusta Beans",
            "Lavazza",
            4_700,
            43,
        ),
        (
            "6",
            "Lavazza Coffee Blends - Try the Italian Espresso",
            "Lavazza",
            5_300,
            34,
        ),
        (
            "7",
            "Lavazza - Caffè Espresso Black Tin - Ground coffee",
            "welikecoffee",
            9_999,
            50,
        ),
        (
            "8",
            "Qualità Oro Mountain Grown - Espresso Coffee Beans",
            "Lavazza",
            3_865,
            44,
        ),
    ];

    entries
        .into_iter()
        .map(|(id, name, brand, cents, rating_tenths)| Product {
            id: ProductId::new(id),
            name: name.to_owned(),
            brand: brand.to_owned(),
            price: Money::from_cents(cents),
            rating: Decimal::new(rating_tenths, 1),
            image: format!("img/product/item-{id}.png"),
        })
        .collect()
}
