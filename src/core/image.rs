//! Image resolver - the raw projection of a product's images.

use crate::{
    entities::{ProductImage, product_image},
    errors::Result,
};
use sea_orm::{DatabaseBackend, Statement, prelude::*};
use tracing::instrument;

fn images_by_product_sql(backend: DatabaseBackend) -> &'static str {
    match backend {
        DatabaseBackend::Postgres => {
            "SELECT id, product_id, image, is_variant FROM product_images WHERE product_id = $1"
        }
        _ => {
            "SELECT id, product_id, image, is_variant FROM product_images WHERE product_id = ?"
        }
    }
}

/// Fetches the images of one product with a single parameterized statement.
///
/// Rows keep the entity shape (`id`, `productId`, `image`, `isVariant`) so pages can use
/// them interchangeably with enriched images. No ordering beyond the store's own.
#[instrument(skip(db))]
pub async fn get_product_images(
    db: &DatabaseConnection,
    product_id: i32,
) -> Result<Vec<product_image::Model>> {
    let backend = db.get_database_backend();
    ProductImage::find()
        .from_raw_sql(Statement::from_sql_and_values(
            backend,
            images_by_product_sql(backend),
            [product_id.into()],
        ))
        .all(db)
        .await
        .map_err(Into::into)
}
