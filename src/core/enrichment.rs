//! Product enrichment - attaches related rows and converts prices for display.
//!
//! Every reader that returns products goes through [`enrich_products`]. Related rows are
//! batch-loaded: one query per relation for the whole page of products, with the four
//! relation loads running concurrently. Inactive parents are attached as `None`, so a
//! soft-deleted category never reaches a page through one of its products.

use crate::{
    entities::{
        Category, ProductImage, ProductType, SubCategory, category, product, product_image,
        product_type, sub_category,
    },
    errors::Result,
};
use rust_decimal::{Decimal, prelude::ToPrimitive};
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, LoaderTrait, QueryFilter};
use serde::Serialize;
use tracing::{debug, instrument};

/// A product with its category, sub-category, product type and images attached,
/// and its prices converted to plain numbers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetails {
    /// Product id
    pub id: i32,
    /// Display name
    pub name: String,
    /// Free-form description
    pub description: Option<String>,
    /// Selling price; `None` when unset or zero
    pub price: Option<f64>,
    /// Internal purchase cost; `None` when unset or zero
    #[serde(rename = "tmp_price_buy")]
    pub tmp_price_buy: Option<f64>,
    /// Raw category reference
    pub category_id: Option<i32>,
    /// Raw sub-category reference
    pub sub_category_id: Option<i32>,
    /// Raw product type reference
    pub product_type_id: Option<i32>,
    /// Always `true` for rows returned by a reader
    pub is_active: bool,
    /// Creation time
    pub created_at: chrono::NaiveDateTime,
    /// Owning category, if set and active
    pub category: Option<category::Model>,
    /// Owning sub-category, if set and active
    pub sub_category: Option<sub_category::Model>,
    /// Product type, if set and active
    pub product_type: Option<product_type::Model>,
    /// Every image of the product
    pub images: Vec<product_image::Model>,
}

/// Converts a stored decimal to the plain number handed to pages.
///
/// Zero collapses to `None` just like an unset price, so a product that really costs
/// nothing is displayed as "no price". Callers rely on that.
#[must_use]
pub fn decimal_to_number(value: Option<Decimal>) -> Option<f64> {
    value.filter(|d| !d.is_zero()).and_then(|d| d.to_f64())
}

impl ProductDetails {
    fn assemble(
        product: product::Model,
        category: Option<category::Model>,
        sub_category: Option<sub_category::Model>,
        product_type: Option<product_type::Model>,
        images: Vec<product_image::Model>,
    ) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: decimal_to_number(product.price),
            tmp_price_buy: decimal_to_number(product.tmp_price_buy),
            category_id: product.category_id,
            sub_category_id: product.sub_category_id,
            product_type_id: product.product_type_id,
            is_active: product.is_active,
            created_at: product.created_at,
            category,
            sub_category,
            product_type,
            images,
        }
    }
}

/// Enriches a page of products, preserving their order.
///
/// # Errors
/// Returns an error if any of the relation loads fails; no partial result is returned.
#[instrument(skip(db, products), fields(count = products.len()))]
pub async fn enrich_products(
    db: &DatabaseConnection,
    products: Vec<product::Model>,
) -> Result<Vec<ProductDetails>> {
    if products.is_empty() {
        return Ok(Vec::new());
    }

    let (categories, sub_categories, product_types, images) = tokio::try_join!(
        products.load_one(
            Category::find().filter(category::Column::IsActive.eq(true)),
            db
        ),
        products.load_one(
            SubCategory::find().filter(sub_category::Column::IsActive.eq(true)),
            db
        ),
        products.load_one(
            ProductType::find().filter(product_type::Column::IsActive.eq(true)),
            db
        ),
        products.load_many(ProductImage, db),
    )?;
    debug!("Loaded relations for {} products", products.len());

    Ok(products
        .into_iter()
        .zip(categories)
        .zip(sub_categories)
        .zip(product_types)
        .zip(images)
        .map(|((((product, category), sub_category), product_type), images)| {
            ProductDetails::assemble(product, category, sub_category, product_type, images)
        })
        .collect())
}

/// Enriches a single product.
pub async fn enrich_product(
    db: &DatabaseConnection,
    product: product::Model,
) -> Result<ProductDetails> {
    let product_id = product.id;
    enrich_products(db, vec![product])
        .await?
        .pop()
        .ok_or_else(|| DbErr::RecordNotFound(format!("product {product_id}")).into())
}
