//! Shared test utilities for the storefront.
//!
//! The storefront never writes to the catalog, so fixtures insert rows directly through
//! the entity active models, standing in for the external admin process.

use crate::{
    entities::{
        Category, ProductType, SubCategory, category, product, product_image, product_type,
        sub_category,
    },
    errors::Result,
};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, Set};

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates an active category.
pub async fn create_test_category(db: &DatabaseConnection, name: &str) -> Result<category::Model> {
    category::ActiveModel {
        name: Set(name.to_string()),
        is_active: Set(true),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Creates an active sub-category under `category_id`.
pub async fn create_test_sub_category(
    db: &DatabaseConnection,
    category_id: i32,
    name: &str,
) -> Result<sub_category::Model> {
    sub_category::ActiveModel {
        name: Set(name.to_string()),
        category_id: Set(category_id),
        is_active: Set(true),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Creates an active product type.
pub async fn create_test_product_type(
    db: &DatabaseConnection,
    name: &str,
) -> Result<product_type::Model> {
    product_type::ActiveModel {
        name: Set(name.to_string()),
        is_active: Set(true),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Attaches a non-variant image to a product.
pub async fn create_test_image(
    db: &DatabaseConnection,
    product_id: i32,
    url: &str,
) -> Result<product_image::Model> {
    product_image::ActiveModel {
        product_id: Set(product_id),
        image: Set(url.to_string()),
        is_variant: Set(false),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Soft-deletes a category the way the admin process does.
pub async fn deactivate_category(db: &DatabaseConnection, category_id: i32) -> Result<()> {
    if let Some(found) = Category::find_by_id(category_id).one(db).await? {
        let mut model = found.into_active_model();
        model.is_active = Set(false);
        model.update(db).await?;
    }
    Ok(())
}

/// Soft-deletes a sub-category.
pub async fn deactivate_sub_category(db: &DatabaseConnection, sub_category_id: i32) -> Result<()> {
    if let Some(found) = SubCategory::find_by_id(sub_category_id).one(db).await? {
        let mut model = found.into_active_model();
        model.is_active = Set(false);
        model.update(db).await?;
    }
    Ok(())
}

/// Soft-deletes a product type.
pub async fn deactivate_product_type(db: &DatabaseConnection, product_type_id: i32) -> Result<()> {
    if let Some(found) = ProductType::find_by_id(product_type_id).one(db).await? {
        let mut model = found.into_active_model();
        model.is_active = Set(false);
        model.update(db).await?;
    }
    Ok(())
}

/// Builder for product rows.
///
/// # Defaults
/// * no category, sub-category, product type, description or prices
/// * active
/// * `created_at`: now
#[derive(Debug, Clone)]
pub struct ProductFixture {
    name: String,
    description: Option<String>,
    price: Option<Decimal>,
    tmp_price_buy: Option<Decimal>,
    category_id: Option<i32>,
    sub_category_id: Option<i32>,
    product_type_id: Option<i32>,
    is_active: bool,
    created_at: chrono::NaiveDateTime,
}

impl ProductFixture {
    /// Starts a fixture with the given name.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            description: None,
            price: None,
            tmp_price_buy: None,
            category_id: None,
            sub_category_id: None,
            product_type_id: None,
            is_active: true,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }

    /// Places the product in a sub-category and in that sub-category's category.
    pub fn sub_category(mut self, sub_category: &sub_category::Model) -> Self {
        self.sub_category_id = Some(sub_category.id);
        self.category_id = Some(sub_category.category_id);
        self
    }

    /// Sets only the category reference.
    pub const fn category(mut self, category_id: i32) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Sets only the sub-category reference, without touching the category.
    pub const fn sub_category_id(mut self, sub_category_id: i32) -> Self {
        self.sub_category_id = Some(sub_category_id);
        self
    }

    /// Sets the product type reference.
    pub const fn product_type(mut self, product_type_id: i32) -> Self {
        self.product_type_id = Some(product_type_id);
        self
    }

    /// Sets the selling price.
    pub const fn price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    /// Sets the purchase cost.
    pub const fn tmp_price_buy(mut self, cost: Decimal) -> Self {
        self.tmp_price_buy = Some(cost);
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Marks the product as soft-deleted.
    pub const fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Overrides the creation time.
    pub const fn created_at(mut self, created_at: chrono::NaiveDateTime) -> Self {
        self.created_at = created_at;
        self
    }

    /// Inserts the product.
    pub async fn insert(self, db: &DatabaseConnection) -> Result<product::Model> {
        product::ActiveModel {
            name: Set(self.name),
            description: Set(self.description),
            price: Set(self.price),
            tmp_price_buy: Set(self.tmp_price_buy),
            category_id: Set(self.category_id),
            sub_category_id: Set(self.sub_category_id),
            product_type_id: Set(self.product_type_id),
            is_active: Set(self.is_active),
            created_at: Set(self.created_at),
            ..Default::default()
        }
        .insert(db)
        .await
        .map_err(Into::into)
    }
}

/// Sets up a database with one category ("Ruang Tamu") and one sub-category ("Sofa").
/// Returns (db, category, `sub_category`) for the common catalog scenarios.
pub async fn setup_with_sub_category() -> Result<(
    DatabaseConnection,
    category::Model,
    sub_category::Model,
)> {
    let db = setup_test_db().await?;
    let category = create_test_category(&db, "Ruang Tamu").await?;
    let sub_category = create_test_sub_category(&db, category.id, "Sofa").await?;
    Ok((db, category, sub_category))
}
