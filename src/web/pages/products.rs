//! Product list, product detail and product images.

use crate::{
    core::{
        category::get_categories,
        enrichment::ProductDetails,
        image::get_product_images,
        product::{get_product_by_id, get_products, get_products_by_sub_category},
    },
    entities::product_image,
    errors::Result,
    web::{
        AppState,
        advantages::{ProductAdvantage, product_advantages},
        filter::{filter_products, selected_filter_name},
        format::{DETAIL_PRICE_MISSING, LIST_PRICE_MISSING, format_price},
        views::{CategoryTile, EmptyState, Page, PageMeta, ProductCard, category_tiles, parse_id},
        whatsapp::{WhatsAppLink, contact_links},
    },
};
use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};

/// Query string of the product list page
#[derive(Debug, Default, Deserialize)]
pub struct ProductListParams {
    /// Selected category id
    pub category: Option<String>,
    /// Selected sub-category id
    pub subcategory: Option<String>,
}

/// Product list page body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListPage {
    /// Filter drawer tree
    pub categories: Vec<CategoryTile>,
    /// Selected category, if any
    pub selected_category: Option<i32>,
    /// Selected sub-category, if any
    pub selected_sub_category: Option<i32>,
    /// Label of the active filter
    pub filter_name: Option<String>,
    /// Products matching the selection
    pub products: Vec<ProductCard>,
}

/// Product detail page body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetailPage {
    /// The enriched product
    pub product: ProductDetails,
    /// Price label, e.g. `Rp 150.000`
    pub formatted_price: String,
    /// Selling points for the product type
    pub advantages: &'static [ProductAdvantage],
    /// Shareable link to this page
    pub product_url: String,
    /// One contact button per branch
    pub whatsapp_links: Vec<WhatsAppLink>,
    /// Title and description
    pub meta: PageMeta,
}

fn cards(products: impl IntoIterator<Item = ProductDetails>) -> Vec<ProductCard> {
    products
        .into_iter()
        .map(|p| ProductCard::new(p, LIST_PRICE_MISSING))
        .collect()
}

/// GET /products?category=&subcategory=
///
/// A sub-category selection is read straight from the store. A category selection narrows
/// the full feed in memory.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ProductListParams>,
) -> Result<Json<ProductListPage>> {
    let selected_category = params.category.as_deref().and_then(parse_id);
    let selected_sub_category = params.subcategory.as_deref().and_then(parse_id);
    let db = &state.database;

    let (categories, products) = match selected_sub_category {
        Some(sub_category_id) => {
            tokio::try_join!(
                get_categories(db),
                get_products_by_sub_category(db, sub_category_id, None),
            )?
        }
        None => {
            let (categories, feed) = tokio::try_join!(get_categories(db), get_products(db, None))?;
            let products = filter_products(&feed, selected_category, None)
                .into_iter()
                .cloned()
                .collect();
            (categories, products)
        }
    };

    let filter_name = selected_filter_name(&categories, selected_category, selected_sub_category);
    Ok(Json(ProductListPage {
        categories: category_tiles(categories),
        selected_category,
        selected_sub_category,
        filter_name,
        products: cards(products),
    }))
}

fn product_not_found(site_name: &str) -> EmptyState {
    EmptyState {
        title: format!("Produk Tidak Ditemukan | {site_name}"),
        message: "Produk yang Anda cari tidak ditemukan".to_string(),
    }
}

/// GET /products/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Page<ProductDetailPage>> {
    let site_name = &state.config.site_name;
    let Some(id) = parse_id(&id) else {
        return Ok(Page::NotFound(product_not_found(site_name)));
    };
    let Some(product) = get_product_by_id(&state.database, id).await? else {
        return Ok(Page::NotFound(product_not_found(site_name)));
    };

    let product_url = format!(
        "{}/products/{}",
        state.config.public_base_url.trim_end_matches('/'),
        product.id
    );
    let whatsapp_links = contact_links(&state.config.branches, &product.name, &product_url)?;
    let advantages = product_advantages(product.product_type.as_ref().map(|t| t.name.as_str()));

    Ok(Page::Found(ProductDetailPage {
        formatted_price: format_price(product.price, DETAIL_PRICE_MISSING),
        meta: PageMeta::for_product(&product, site_name),
        advantages,
        product_url,
        whatsapp_links,
        product,
    }))
}

/// GET /products/{id}/images
pub async fn images(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Page<Vec<product_image::Model>>> {
    let Some(id) = parse_id(&id) else {
        return Ok(Page::NotFound(EmptyState::new("Produk tidak ditemukan")));
    };
    Ok(Page::Found(get_product_images(&state.database, id).await?))
}
