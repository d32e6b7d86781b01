//! GET /search?q= - product search page.

use crate::{
    core::{enrichment::ProductDetails, product::search_products},
    errors::Result,
    web::{AppState, format::LIST_PRICE_MISSING, views::ProductCard},
};
use axum::{
    Json,
    extract::{Query, State},
};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Query string of the search page
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    /// Raw search text
    pub q: Option<String>,
}

/// Search page body
#[derive(Debug, Serialize)]
pub struct SearchPage {
    /// Trimmed query as searched
    pub query: String,
    /// Matches, name ascending
    pub products: Vec<ProductCard>,
}

/// Trims the query and searches; an empty query returns nothing without touching the store.
pub async fn search_page_results(
    db: &DatabaseConnection,
    raw_query: Option<&str>,
) -> Result<(String, Vec<ProductDetails>)> {
    let query = raw_query.unwrap_or_default().trim();
    if query.is_empty() {
        debug!("Empty search query, skipping store");
        return Ok((String::new(), Vec::new()));
    }
    let products = search_products(db, query, None).await?;
    Ok((query.to_string(), products))
}

/// GET /search
pub async fn show(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchPage>> {
    let (query, products) = search_page_results(&state.database, params.q.as_deref()).await?;
    Ok(Json(SearchPage {
        query,
        products: products
            .into_iter()
            .map(|p| ProductCard::new(p, LIST_PRICE_MISSING))
            .collect(),
    }))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn test_blank_query_makes_no_store_calls() -> Result<()> {
        let db = MockDatabase::new(DatabaseBackend::Sqlite).into_connection();

        for raw in [None, Some(""), Some("   \t ")] {
            let (query, products) = search_page_results(&db, raw).await?;
            assert!(query.is_empty());
            assert!(products.is_empty());
        }

        assert!(db.into_transaction_log().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_query_is_trimmed_before_search() -> Result<()> {
        let (db, _category, sub_category) = setup_with_sub_category().await?;
        ProductFixture::new("Sofa Minimalis")
            .sub_category(&sub_category)
            .insert(&db)
            .await?;

        let (query, products) = search_page_results(&db, Some("  minimalis ")).await?;
        assert_eq!(query, "minimalis");
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Sofa Minimalis");
        Ok(())
    }
}
