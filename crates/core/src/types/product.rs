//! Catalog product record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::money::Money;

/// A product as stored in the catalog.
///
/// The catalog is the source of truth for product data; the cart copies the
/// fields it needs at add time so stored carts stay renderable even if the
/// catalog changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Opaque catalog id.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Brand name, used for filtering.
    pub brand: String,
    /// Unit price.
    pub price: Money,
    /// Average review score, 0.0 to 5.0.
    pub rating: Decimal,
    /// Image path, relative to the static root.
    pub image: String,
}
