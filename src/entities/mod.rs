//! Entity module - Contains all SeaORM entity definitions for the catalog tables.
//! Ownership is strictly hierarchical: Category → SubCategory → Product → ProductImage.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod category;
pub mod product;
pub mod product_image;
pub mod product_type;
pub mod sub_category;

// Re-export specific types to avoid conflicts
pub use category::{Column as CategoryColumn, Entity as Category, Model as CategoryModel};
pub use product::{Column as ProductColumn, Entity as Product, Model as ProductModel};
pub use product_image::{
    Column as ProductImageColumn, Entity as ProductImage, Model as ProductImageModel,
};
pub use product_type::{
    Column as ProductTypeColumn, Entity as ProductType, Model as ProductTypeModel,
};
pub use sub_category::{
    Column as SubCategoryColumn, Entity as SubCategory, Model as SubCategoryModel,
};
