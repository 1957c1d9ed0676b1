//! Cart persistence behind a typed repository interface.
//!
//! The stored form is a JSON array of line items under a single key (one
//! file), the same shape the cart has always been stored in. Loading fails
//! soft: an absent or malformed stored cart is treated as empty and never
//! surfaces an error. Saving is the only operation that can fail.

use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;

use roastline_core::{Cart, LineItem};

/// Errors writing the cart to its backing store.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Failed to write cart: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to serialize cart: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Durable storage for the cart.
///
/// The serialize/deserialize boundary lives entirely inside implementations;
/// callers only ever see `Cart` values.
pub trait CartRepository: Send + Sync {
    /// Load the stored cart.
    ///
    /// Never fails: absent or unparseable data yields an empty cart.
    fn load(&self) -> Cart;

    /// Persist the cart, replacing whatever was stored before.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if serialization or the write fails.
    fn save(&self, cart: &Cart) -> Result<(), RepositoryError>;
}

/// Cart storage in a single JSON file under the data directory.
pub struct JsonFileCartRepository {
    path: PathBuf,
}

impl JsonFileCartRepository {
    /// Create a repository backed by the given file path.
    ///
    /// The file and its parent directory are created lazily on first save.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl CartRepository for JsonFileCartRepository {
    fn load(&self) -> Cart {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No stored cart, starting empty");
                return Cart::new();
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to read stored cart, starting empty");
                return Cart::new();
            }
        };

        match serde_json::from_str::<Vec<LineItem>>(&raw) {
            Ok(items) => Cart::from_items(items),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Malformed stored cart, starting empty");
                Cart::new()
            }
        }
    }

    fn save(&self, cart: &Cart) -> Result<(), RepositoryError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string(cart.items())?;

        // Write-then-rename so a crash mid-write cannot corrupt the stored cart
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

/// In-memory cart storage for tests.
///
/// Holds the serialized JSON string rather than the items so tests exercise
/// the same serialize/deserialize boundary as the file-backed store.
#[derive(Default)]
pub struct MemoryCartRepository {
    stored: Mutex<Option<String>>,
}

impl MemoryCartRepository {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a raw serialized value.
    #[must_use]
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            stored: Mutex::new(Some(raw.into())),
        }
    }
}

impl CartRepository for MemoryCartRepository {
    fn load(&self) -> Cart {
        let Ok(stored) = self.stored.lock() else {
            return Cart::new();
        };
        let Some(raw) = stored.as_deref() else {
            return Cart::new();
        };

        match serde_json::from_str::<Vec<LineItem>>(raw) {
            Ok(items) => Cart::from_items(items),
            Err(e) => {
                tracing::warn!(error = %e, "Malformed stored cart, starting empty");
                Cart::new()
            }
        }
    }

    fn save(&self, cart: &Cart) -> Result<(), RepositoryError> {
        let json = serde_json::to_string(cart.items())?;
        if let Ok(mut stored) = self.stored.lock() {
            *stored = Some(json);
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use roastline_core::{Money, Product, ProductId};

    use super::*;

    fn sample_cart() -> Cart {
        let mut cart = Cart::new();
        cart.add(&Product {
            id: ProductId::new("1"),
            name: "Coffee Beans - Espresso Arabica and Robusta Beans".to_owned(),
            brand: "Lavazza".to_owned(),
            price: Money::from_cents(4_700),
            rating: Decimal::new(43, 1),
            image: "img/product/item-1.png".to_owned(),
        });
        cart
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileCartRepository::new(dir.path().join("cart.json"));

        let cart = sample_cart();
        repo.save(&cart).unwrap();

        assert_eq!(repo.load(), cart);
    }

    #[test]
    fn test_file_missing_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileCartRepository::new(dir.path().join("missing.json"));
        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_file_malformed_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.json");
        std::fs::write(&path, "{not json").unwrap();

        let repo = JsonFileCartRepository::new(path);
        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_file_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileCartRepository::new(dir.path().join("nested/state/cart.json"));
        repo.save(&sample_cart()).unwrap();
        assert_eq!(repo.load(), sample_cart());
    }

    #[test]
    fn test_save_replaces_previous_value() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileCartRepository::new(dir.path().join("cart.json"));

        let mut cart = sample_cart();
        repo.save(&cart).unwrap();

        cart.remove(&ProductId::new("1"));
        repo.save(&cart).unwrap();

        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_memory_round_trip() {
        let repo = MemoryCartRepository::new();
        let cart = sample_cart();
        repo.save(&cart).unwrap();
        assert_eq!(repo.load(), cart);
    }

    #[test]
    fn test_memory_malformed_loads_empty() {
        let repo = MemoryCartRepository::with_raw("not even close");
        assert!(repo.load().is_empty());
    }
}
