//! Category and sub-category pages.

use crate::{
    core::{
        category::{get_categories, get_category_by_id},
        sub_category::{SubCategoryWithProducts, get_sub_categories_by_category, get_sub_category_by_id},
    },
    entities::sub_category,
    errors::Result,
    web::{
        AppState,
        views::{CategoryTile, EmptyState, Page, category_tiles, parse_id},
    },
};
use axum::{
    Json,
    extract::{Path, State},
};

fn category_not_found() -> EmptyState {
    EmptyState::new("Kategori tidak ditemukan")
}

fn sub_category_not_found() -> EmptyState {
    EmptyState::new("Sub kategori tidak ditemukan")
}

/// GET /categories
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<CategoryTile>>> {
    let categories = get_categories(&state.database).await?;
    Ok(Json(category_tiles(categories)))
}

/// GET /categories/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Page<CategoryTile>> {
    let Some(id) = parse_id(&id) else {
        return Ok(Page::NotFound(category_not_found()));
    };
    let category = get_category_by_id(&state.database, id).await?;
    Ok(Page::from_option(category.map(CategoryTile::from), category_not_found))
}

/// GET /categories/{id}/sub-categories
pub async fn list_sub_categories(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Page<Vec<sub_category::Model>>> {
    let Some(id) = parse_id(&id) else {
        return Ok(Page::NotFound(category_not_found()));
    };
    Ok(Page::Found(
        get_sub_categories_by_category(&state.database, id).await?,
    ))
}

/// GET /sub-categories/{id}
pub async fn get_sub_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Page<SubCategoryWithProducts>> {
    let Some(id) = parse_id(&id) else {
        return Ok(Page::NotFound(sub_category_not_found()));
    };
    let sub_category = get_sub_category_by_id(&state.database, id).await?;
    Ok(Page::from_option(sub_category, sub_category_not_found))
}
