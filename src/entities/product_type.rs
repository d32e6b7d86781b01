//! Product type entity - Groups products for the "advantages" panel on the detail page.
//!
//! Field names serialize verbatim (`is_active`), unlike the other catalog entities.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Product type database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product_types")]
pub struct Model {
    /// Unique identifier for the product type
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Type name (e.g. "Sofa", "Kayu Jati")
    pub name: String,
    /// Soft delete flag
    pub is_active: bool,
}

/// Defines relationships between `ProductType` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One product type is shared by many products
    #[sea_orm(has_many = "super::product::Entity")]
    Products,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Products.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
