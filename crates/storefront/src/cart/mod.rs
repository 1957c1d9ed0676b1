//! The cart service: working cart state plus its persistence.
//!
//! One `CartService` is constructed at application start from whatever the
//! repository has stored, and injected everywhere through `AppState`. Every
//! mutation applies the pure cart operation, persists, and hands back a
//! [`CartUpdate`] for the rendering and notification surfaces.

pub mod repository;

pub use repository::{CartRepository, JsonFileCartRepository, MemoryCartRepository, RepositoryError};

use roastline_core::{Cart, CartSummary, LineItem, Product, ProductId};

/// Status line shown after adding a product.
pub const ADDED_NOTICE: &str = "Added to cart";

/// Status line shown after removing a product.
pub const REMOVED_NOTICE: &str = "Removed from cart";

/// Result of a cart mutation, consumed by the route handlers.
#[derive(Debug, Clone)]
pub struct CartUpdate {
    /// Derived figures for the summary and badge displays.
    pub summary: CartSummary,
    /// Short human-readable status line, when the action warrants a toast.
    /// Quantity edits carry none; only add and remove do.
    pub notice: Option<&'static str>,
}

/// Cart state manager bound to a repository.
pub struct CartService {
    cart: Cart,
    repository: Box<dyn CartRepository>,
}

impl CartService {
    /// Create a service seeded from the repository's stored cart.
    #[must_use]
    pub fn new(repository: Box<dyn CartRepository>) -> Self {
        let cart = repository.load();
        Self { cart, repository }
    }

    /// Add one unit of a product, merging with an existing line item.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if persisting fails. The in-memory cart is
    /// already mutated in that case; storage catches up on the next
    /// successful save.
    pub fn add_item(&mut self, product: &Product) -> Result<CartUpdate, RepositoryError> {
        self.cart.add(product);
        self.persist()?;
        tracing::debug!(product_id = %product.id, count = self.cart.item_count(), "Added to cart");
        Ok(self.update(Some(ADDED_NOTICE)))
    }

    /// Remove a line item. Unknown ids are a no-op that still persists.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if persisting fails.
    pub fn remove_item(&mut self, id: &ProductId) -> Result<CartUpdate, RepositoryError> {
        self.cart.remove(id);
        self.persist()?;
        tracing::debug!(product_id = %id, count = self.cart.item_count(), "Removed from cart");
        Ok(self.update(Some(REMOVED_NOTICE)))
    }

    /// Set a line item's quantity; zero removes it. Unknown ids are a no-op.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if persisting fails.
    pub fn update_quantity(
        &mut self,
        id: &ProductId,
        quantity: u32,
    ) -> Result<CartUpdate, RepositoryError> {
        self.cart.set_quantity(id, quantity);
        self.persist()?;
        tracing::debug!(product_id = %id, quantity, "Updated cart quantity");
        Ok(self.update(None))
    }

    /// Derived figures for the current cart.
    #[must_use]
    pub fn summary(&self) -> CartSummary {
        self.cart.summary()
    }

    /// The line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        self.cart.items()
    }

    /// Sum of quantities, for the header badge.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.cart.item_count()
    }

    /// Whether the cart has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    fn persist(&self) -> Result<(), RepositoryError> {
        self.repository.save(&self.cart)
    }

    fn update(&self, notice: Option<&'static str>) -> CartUpdate {
        CartUpdate {
            summary: self.cart.summary(),
            notice,
        }
    }
}
