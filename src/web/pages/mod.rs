//! Page handlers, one module per area of the storefront.

pub mod categories;
pub mod home;
pub mod products;
pub mod search;
