//! The cart value type and its derived totals.
//!
//! `Cart` is a pure in-memory value: an ordered sequence of line items, at
//! most one per product id, in the order products were first added. All
//! operations are linear scans over the item list. Persistence and
//! notification live in the storefront crate; this module has no I/O.

use serde::{Deserialize, Serialize};

use crate::types::{Money, Product, ProductId};

/// Subtotal at or above which shipping is free.
///
/// Kept as module constants rather than configuration until product
/// requirements say otherwise.
#[must_use]
pub fn free_shipping_threshold() -> Money {
    Money::from_cents(5_000)
}

/// Flat shipping fee charged below the free-shipping threshold.
#[must_use]
pub fn flat_shipping_fee() -> Money {
    Money::from_cents(599)
}

/// One product entry in the cart with its quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: ProductId,
    pub name: String,
    pub price: Money,
    pub image: String,
    pub quantity: u32,
}

impl LineItem {
    /// Price times quantity for this line.
    #[must_use]
    pub fn line_total(&self) -> Money {
        self.price * self.quantity
    }
}

impl From<&Product> for LineItem {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity: 1,
        }
    }
}

/// Derived cart figures handed to the rendering surface after each mutation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartSummary {
    pub subtotal: Money,
    pub shipping_fee: Money,
    pub total: Money,
    pub item_count: u32,
}

/// An ordered sequence of line items, one per product id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Build a cart from stored line items.
    ///
    /// Duplicate ids in the input collapse into the first occurrence, with
    /// quantities merged, so the one-item-per-id invariant holds even for
    /// stored data written by something else.
    #[must_use]
    pub fn from_items(items: Vec<LineItem>) -> Self {
        let mut cart = Self::new();
        for item in items {
            match cart.find_mut(&item.id) {
                Some(existing) => existing.quantity += item.quantity,
                None => cart.items.push(item),
            }
        }
        cart
    }

    /// Add one unit of a product.
    ///
    /// If the product is already in the cart its quantity is incremented by
    /// one; otherwise a new line item with quantity 1 is appended.
    pub fn add(&mut self, product: &Product) {
        match self.find_mut(&product.id) {
            Some(item) => item.quantity += 1,
            None => self.items.push(LineItem::from(product)),
        }
    }

    /// Remove a line item. Unknown ids are a no-op.
    pub fn remove(&mut self, id: &ProductId) {
        self.items.retain(|item| &item.id != id);
    }

    /// Set the quantity of a line item.
    ///
    /// A quantity of zero removes the item. Unknown ids are a no-op.
    pub fn set_quantity(&mut self, id: &ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove(id);
            return;
        }

        if let Some(item) = self.find_mut(id) {
            item.quantity = quantity;
        }
    }

    /// Sum of price times quantity over all items.
    #[must_use]
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Shipping fee: free at or above the threshold, flat fee below it.
    #[must_use]
    pub fn shipping_fee(&self) -> Money {
        if self.subtotal() >= free_shipping_threshold() {
            Money::zero()
        } else {
            flat_shipping_fee()
        }
    }

    /// Subtotal plus shipping fee.
    #[must_use]
    pub fn total(&self) -> Money {
        self.subtotal() + self.shipping_fee()
    }

    /// Sum of quantities, used for the header badge.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Whether the cart has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Derived figures for the rendering surface.
    #[must_use]
    pub fn summary(&self) -> CartSummary {
        CartSummary {
            subtotal: self.subtotal(),
            shipping_fee: self.shipping_fee(),
            total: self.total(),
            item_count: self.item_count(),
        }
    }

    fn find_mut(&mut self, id: &ProductId) -> Option<&mut LineItem> {
        self.items.iter_mut().find(|item| &item.id == id)
    }
}
