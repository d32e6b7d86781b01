//! Sub-category reader - listings per category and the sub-category page.

use crate::{
    core::enrichment::{ProductDetails, enrich_products},
    entities::{Category, Product, SubCategory, category, product, sub_category},
    errors::Result,
};
use sea_orm::{QueryOrder, prelude::*};
use serde::Serialize;
use tracing::{debug, instrument};

/// A sub-category with its owning category and its active products.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubCategoryWithProducts {
    /// The sub-category row
    #[serde(flatten)]
    pub sub_category: sub_category::Model,
    /// The owning category
    pub category: category::Model,
    /// Active products, name ascending, fully enriched
    pub products: Vec<ProductDetails>,
}

/// Retrieves the active sub-categories of one category, ordered by name.
#[instrument(skip(db))]
pub async fn get_sub_categories_by_category(
    db: &DatabaseConnection,
    category_id: i32,
) -> Result<Vec<sub_category::Model>> {
    SubCategory::find()
        .filter(sub_category::Column::CategoryId.eq(category_id))
        .filter(sub_category::Column::IsActive.eq(true))
        .order_by_asc(sub_category::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds one active sub-category with its owning category and active products.
///
/// Returns `None` if the sub-category is missing or inactive, and also when its owning
/// category is inactive: a hidden category hides everything below it.
#[instrument(skip(db))]
pub async fn get_sub_category_by_id(
    db: &DatabaseConnection,
    sub_category_id: i32,
) -> Result<Option<SubCategoryWithProducts>> {
    let Some((sub_category, Some(category))) = SubCategory::find_by_id(sub_category_id)
        .filter(sub_category::Column::IsActive.eq(true))
        .find_also_related(Category)
        .one(db)
        .await?
    else {
        return Ok(None);
    };

    if !category.is_active {
        debug!(
            "Sub-category {} hidden by inactive category {}",
            sub_category.id, category.id
        );
        return Ok(None);
    }

    let products = Product::find()
        .filter(product::Column::SubCategoryId.eq(sub_category.id))
        .filter(product::Column::IsActive.eq(true))
        .order_by_asc(product::Column::Name)
        .all(db)
        .await?;
    let products = enrich_products(db, products).await?;

    Ok(Some(SubCategoryWithProducts {
        sub_category,
        category,
        products,
    }))
}
