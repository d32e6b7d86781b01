//! Category reader - active categories with their active sub-categories.
//!
//! Both levels are ordered by name. An inactive or missing category is reported as
//! `Ok(None)`, which callers render as an empty state rather than a failure.

use crate::{
    entities::{Category, SubCategory, category, sub_category},
    errors::Result,
};
use sea_orm::{LoaderTrait, QueryOrder, Select, prelude::*};
use serde::Serialize;
use tracing::instrument;

/// A category with its active sub-categories attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryWithSubCategories {
    /// The category row
    #[serde(flatten)]
    pub category: category::Model,
    /// Active sub-categories, name ascending
    pub sub_categories: Vec<sub_category::Model>,
}

fn active_sub_categories() -> Select<SubCategory> {
    SubCategory::find()
        .filter(sub_category::Column::IsActive.eq(true))
        .order_by_asc(sub_category::Column::Name)
}

async fn attach_sub_categories(
    db: &DatabaseConnection,
    categories: Vec<category::Model>,
) -> Result<Vec<CategoryWithSubCategories>> {
    let sub_categories = categories.load_many(active_sub_categories(), db).await?;
    Ok(categories
        .into_iter()
        .zip(sub_categories)
        .map(|(category, sub_categories)| CategoryWithSubCategories {
            category,
            sub_categories,
        })
        .collect())
}

/// Retrieves all active categories, ordered alphabetically by name, each with its
/// active sub-categories.
///
/// This feeds the home page grid, the categories page and the product filter drawer.
#[instrument(skip(db))]
pub async fn get_categories(db: &DatabaseConnection) -> Result<Vec<CategoryWithSubCategories>> {
    let categories = Category::find()
        .filter(category::Column::IsActive.eq(true))
        .order_by_asc(category::Column::Name)
        .all(db)
        .await?;
    attach_sub_categories(db, categories).await
}

/// Finds one active category by id, with its active sub-categories.
///
/// Returns `None` if the category does not exist or is inactive.
#[instrument(skip(db))]
pub async fn get_category_by_id(
    db: &DatabaseConnection,
    category_id: i32,
) -> Result<Option<CategoryWithSubCategories>> {
    let Some(category) = Category::find_by_id(category_id)
        .filter(category::Column::IsActive.eq(true))
        .one(db)
        .await?
    else {
        return Ok(None);
    };
    Ok(attach_sub_categories(db, vec![category]).await?.pop())
}
