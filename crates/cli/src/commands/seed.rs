//! Seed the catalog file with the built-in product list.

use roastline_storefront::catalog::seed_products;
use roastline_storefront::config::StorefrontConfig;

/// Write the seed catalog to the configured catalog path.
///
/// Refuses to overwrite an existing file unless `force` is set.
///
/// # Errors
///
/// Returns an error if the path already exists without `force`, or if
/// serialization or the write fails.
pub fn catalog(force: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    let path = &config.catalog_path;

    if path.exists() && !force {
        return Err(format!(
            "{} already exists, pass --force to overwrite",
            path.display()
        )
        .into());
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let products = seed_products();
    let json = serde_json::to_string_pretty(&products)?;
    std::fs::write(path, json)?;

    tracing::info!(path = %path.display(), count = products.len(), "Seed catalog written");
    Ok(())
}
