//! Inspect and clear the persisted cart.

use roastline_storefront::cart::{CartRepository, JsonFileCartRepository};
use roastline_storefront::config::StorefrontConfig;

/// Print the stored line items and totals.
///
/// # Errors
///
/// Returns an error if configuration cannot be loaded. A missing or
/// malformed stored cart prints as empty, matching the storefront's
/// fail-soft load.
pub fn show() -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    let repository = JsonFileCartRepository::new(config.cart_path());
    let cart = repository.load();

    if cart.is_empty() {
        tracing::info!("Cart is empty");
        return Ok(());
    }

    for item in cart.items() {
        tracing::info!(
            id = %item.id,
            quantity = item.quantity,
            price = %item.price,
            line_total = %item.line_total(),
            "{}",
            item.name
        );
    }

    let summary = cart.summary();
    tracing::info!(
        subtotal = %summary.subtotal,
        shipping = %summary.shipping_fee,
        total = %summary.total,
        items = summary.item_count,
        "Cart totals"
    );
    Ok(())
}

/// Delete the stored cart file.
///
/// # Errors
///
/// Returns an error if configuration cannot be loaded or the delete fails.
/// A missing file is treated as already clear.
pub fn clear() -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    let path = config.cart_path();

    match std::fs::remove_file(&path) {
        Ok(()) => {
            tracing::info!(path = %path.display(), "Cart cleared");
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::info!("No stored cart to clear");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
