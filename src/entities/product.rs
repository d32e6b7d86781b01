//! Product entity - A catalog item shown in listings and on its own detail page.
//!
//! Prices are stored as decimals. They are converted to plain numbers by
//! [`crate::core::enrichment`] before they leave the data-access layer, so the raw
//! [`Decimal`] values in this model never reach a page.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Product database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Unique identifier for the product
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Display name (e.g. "Sofa L Minimalis")
    pub name: String,
    /// Free-form description, searched alongside the name
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    /// Selling price
    #[sea_orm(column_type = "Decimal(Some((15, 2)))", nullable)]
    pub price: Option<Decimal>,
    /// Internal purchase cost
    #[sea_orm(column_type = "Decimal(Some((15, 2)))", nullable)]
    #[serde(rename = "tmp_price_buy")]
    pub tmp_price_buy: Option<Decimal>,
    /// Owning category, if classified
    pub category_id: Option<i32>,
    /// Owning sub-category, if classified
    pub sub_category_id: Option<i32>,
    /// Product type, used only to pick display advantages
    pub product_type_id: Option<i32>,
    /// Soft delete flag
    pub is_active: bool,
    /// When the product was created; the product feed is ordered newest first
    pub created_at: DateTime,
}

/// Defines relationships between Product and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each product may belong to one category
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id"
    )]
    Category,
    /// Each product may belong to one sub-category
    #[sea_orm(
        belongs_to = "super::sub_category::Entity",
        from = "Column::SubCategoryId",
        to = "super::sub_category::Column::Id"
    )]
    SubCategory,
    /// Each product may reference one product type
    #[sea_orm(
        belongs_to = "super::product_type::Entity",
        from = "Column::ProductTypeId",
        to = "super::product_type::Column::Id"
    )]
    ProductType,
    /// One product has many images
    #[sea_orm(has_many = "super::product_image::Entity")]
    Images,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::sub_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SubCategory.def()
    }
}

impl Related<super::product_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductType.def()
    }
}

impl Related<super::product_image::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Images.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
