//! Home page: the product grid with filter and search.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use rust_decimal::Decimal;
use serde::Deserialize;

use roastline_core::{Money, ProductFilter};

use crate::error::{AppError, Result};
use crate::filters;
use crate::routes::products::ProductCardView;
use crate::state::AppState;

/// Filter and search query parameters.
///
/// All fields arrive as raw strings; blank values mean "no constraint",
/// matching how the storefront's filter form submits untouched inputs.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogQuery {
    pub q: Option<String>,
    pub brand: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
}

impl CatalogQuery {
    /// Convert the raw query into a catalog filter.
    ///
    /// # Errors
    ///
    /// Returns `AppError::BadRequest` if a price bound is non-blank but not
    /// a valid decimal number.
    fn to_filter(&self) -> Result<ProductFilter> {
        Ok(ProductFilter {
            min_price: parse_price(self.min_price.as_deref(), "min_price")?,
            max_price: parse_price(self.max_price.as_deref(), "max_price")?,
            brand: self.brand.clone(),
        })
    }

    fn query(&self) -> Option<&str> {
        self.q.as_deref()
    }
}

fn parse_price(raw: Option<&str>, field: &str) -> Result<Option<Money>> {
    let Some(raw) = raw else { return Ok(None) };
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<Decimal>()
        .map(|amount| Some(Money::new(amount)))
        .map_err(|_| AppError::BadRequest(format!("{field} must be a number")))
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home/index.html")]
pub struct HomeTemplate {
    pub products: Vec<ProductCardView>,
    pub brands: Vec<String>,
    pub total_count: usize,
    pub q: String,
    pub brand: String,
    pub min_price: String,
    pub max_price: String,
}

/// Display the home page product grid.
pub async fn home(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Result<HomeTemplate> {
    let filter = query.to_filter()?;
    let products: Vec<ProductCardView> = state
        .catalog()
        .select(&filter, query.query())
        .into_iter()
        .map(ProductCardView::from)
        .collect();
    let brands = state
        .catalog()
        .brands()
        .into_iter()
        .map(str::to_owned)
        .collect();

    Ok(HomeTemplate {
        total_count: products.len(),
        products,
        brands,
        q: query.q.unwrap_or_default(),
        brand: query.brand.unwrap_or_default(),
        min_price: query.min_price.unwrap_or_default(),
        max_price: query.max_price.unwrap_or_default(),
    })
}
