//! View models shared by the page handlers.
//!
//! Pages are rendered as JSON. Anything that can be missing goes through [`Page`], so an
//! unknown or inactive row becomes a 404 with an empty-state body instead of a failure.

use crate::{
    core::{category::CategoryWithSubCategories, enrichment::ProductDetails},
    web::{
        format::format_price,
        icons::{CategoryIcon, category_icon, sort_others_last},
    },
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Image used for products without any picture
pub const PLACEHOLDER_IMAGE: &str = "/api/placeholder/placeholder.png";

/// Body of a not-found page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    /// Document title
    pub title: String,
    /// Text shown in place of the content
    pub message: String,
}

impl EmptyState {
    /// Empty state with a generic title.
    #[must_use]
    pub fn new(message: &str) -> Self {
        Self {
            title: "Tidak Ditemukan".to_string(),
            message: message.to_string(),
        }
    }
}

/// A page that is either rendered or replaced by an empty state.
#[derive(Debug)]
pub enum Page<T> {
    /// Content found
    Found(T),
    /// Missing, inactive or malformed id
    NotFound(EmptyState),
}

impl<T> Page<T> {
    /// Wraps a reader result, using `empty` when the row is absent.
    pub fn from_option(value: Option<T>, empty: impl FnOnce() -> EmptyState) -> Self {
        value.map_or_else(|| Self::NotFound(empty()), Self::Found)
    }
}

impl<T: Serialize> IntoResponse for Page<T> {
    fn into_response(self) -> Response {
        match self {
            Self::Found(body) => Json(body).into_response(),
            Self::NotFound(empty) => (StatusCode::NOT_FOUND, Json(empty)).into_response(),
        }
    }
}

/// Parses a path or query id. Anything but a whole `i32` is treated as absent.
#[must_use]
pub fn parse_id(raw: &str) -> Option<i32> {
    raw.trim().parse().ok()
}

/// A category on the home grid or the categories page.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryTile {
    /// Category with its sub-categories
    #[serde(flatten)]
    pub category: CategoryWithSubCategories,
    /// Icon picked from the category name
    pub icon: CategoryIcon,
}

impl From<CategoryWithSubCategories> for CategoryTile {
    fn from(category: CategoryWithSubCategories) -> Self {
        let icon = category_icon(Some(&category.category.name));
        Self { category, icon }
    }
}

/// Orders categories for display (catch-alls last) and attaches icons.
#[must_use]
pub fn category_tiles(mut categories: Vec<CategoryWithSubCategories>) -> Vec<CategoryTile> {
    sort_others_last(&mut categories);
    categories.into_iter().map(CategoryTile::from).collect()
}

/// A product in a grid.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCard {
    /// The enriched product
    #[serde(flatten)]
    pub product: ProductDetails,
    /// Price label, e.g. `Rp 150.000`
    pub formatted_price: String,
    /// First image, or [`PLACEHOLDER_IMAGE`]
    pub main_image: String,
}

impl ProductCard {
    /// Builds a card, labelling missing prices with `missing`.
    #[must_use]
    pub fn new(product: ProductDetails, missing: &str) -> Self {
        let formatted_price = format_price(product.price, missing);
        let main_image = product
            .images
            .first()
            .map_or_else(|| PLACEHOLDER_IMAGE.to_string(), |image| image.image.clone());
        Self {
            product,
            formatted_price,
            main_image,
        }
    }
}

/// Title and description of a rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    /// `<title>`
    pub title: String,
    /// Meta description
    pub description: String,
}

impl PageMeta {
    /// Metadata for a product detail page.
    #[must_use]
    pub fn for_product(product: &ProductDetails, site_name: &str) -> Self {
        let description = product
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map_or_else(
                || format!("Lihat detail produk {} dari {site_name}", product.name),
                ToString::to_string,
            );
        Self {
            title: format!("{} | {site_name}", product.name),
            description,
        }
    }
}
