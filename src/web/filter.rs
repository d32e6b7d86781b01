//! In-memory product filtering for the product list page.
//!
//! The list page fetches the full feed once and narrows it here, so the result is always a
//! pure function of (products, selected category, selected sub-category).

use crate::core::{category::CategoryWithSubCategories, enrichment::ProductDetails};

/// Narrows `products` to the current selection.
///
/// A selected sub-category wins over a selected category. With neither selected the whole
/// list is returned.
#[must_use]
pub fn filter_products(
    products: &[ProductDetails],
    category_id: Option<i32>,
    sub_category_id: Option<i32>,
) -> Vec<&ProductDetails> {
    products
        .iter()
        .filter(|product| match (sub_category_id, category_id) {
            (Some(sub_category_id), _) => product.sub_category_id == Some(sub_category_id),
            (None, Some(category_id)) => product.category_id == Some(category_id),
            (None, None) => true,
        })
        .collect()
}

/// Label for the active filter, shown above the product grid.
///
/// Returns `None` when nothing is selected. Ids that are not in the tree get a generic label.
#[must_use]
pub fn selected_filter_name(
    categories: &[CategoryWithSubCategories],
    category_id: Option<i32>,
    sub_category_id: Option<i32>,
) -> Option<String> {
    if let Some(sub_category_id) = sub_category_id {
        let name = categories
            .iter()
            .flat_map(|c| c.sub_categories.iter())
            .find(|s| s.id == sub_category_id)
            .map_or_else(|| "Unknown Subcategory".to_string(), |s| s.name.clone());
        return Some(name);
    }
    category_id.map(|category_id| {
        categories
            .iter()
            .find(|c| c.category.id == category_id)
            .map_or_else(|| "Unknown Category".to_string(), |c| c.category.name.clone())
    })
}
