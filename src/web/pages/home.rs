//! GET / - category grid plus a random product strip.

use crate::{
    core::{category::get_categories, product::get_random_products},
    errors::Result,
    web::{
        AppState,
        format::LIST_PRICE_MISSING,
        views::{CategoryTile, ProductCard, category_tiles},
    },
};
use axum::{Json, extract::State};
use serde::Serialize;

/// Number of products in the home page strip
pub const HOME_PRODUCT_COUNT: u64 = 10;

/// Home page body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePage {
    /// Site name for the header
    pub site_name: String,
    /// Category grid, catch-all categories last
    pub categories: Vec<CategoryTile>,
    /// Random window of products
    pub products: Vec<ProductCard>,
}

/// GET / - categories and random products, loaded concurrently
pub async fn show(State(state): State<AppState>) -> Result<Json<HomePage>> {
    let (categories, products) = tokio::try_join!(
        get_categories(&state.database),
        get_random_products(&state.database, Some(HOME_PRODUCT_COUNT)),
    )?;

    Ok(Json(HomePage {
        site_name: state.config.site_name.clone(),
        categories: category_tiles(categories),
        products: products
            .into_iter()
            .map(|p| ProductCard::new(p, LIST_PRICE_MISSING))
            .collect(),
    }))
}
