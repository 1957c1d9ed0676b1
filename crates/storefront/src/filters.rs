//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use roastline_core::Money;

/// Format a money value with a currency symbol, e.g. `$47.00`.
///
/// Usage in templates: `{{ item.price|money }}`
#[askama::filter_fn]
pub fn money(value: &Money, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(value.to_string())
}

/// Format a shipping fee, rendering a zero fee as "Free".
///
/// Usage in templates: `{{ summary.shipping_fee|shipping }}`
#[askama::filter_fn]
pub fn shipping(value: &Money, _env: &dyn askama::Values) -> askama::Result<String> {
    if value.is_zero() {
        Ok("Free".to_owned())
    } else {
        Ok(value.to_string())
    }
}

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl std::fmt::Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}
