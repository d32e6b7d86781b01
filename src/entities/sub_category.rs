//! Sub-category entity - Second level of the catalog tree.
//!
//! Each sub-category belongs to exactly one category and owns zero or more products.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Sub-category database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sub_categories")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Unique identifier for the sub-category
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Display name
    pub name: String,
    /// Owning category
    pub category_id: i32,
    /// Soft delete flag
    pub is_active: bool,
}

/// Defines relationships between `SubCategory` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each sub-category belongs to one category
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id"
    )]
    Category,
    /// One sub-category has many products
    #[sea_orm(has_many = "super::product::Entity")]
    Products,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Products.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
