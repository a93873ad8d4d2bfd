pub mod recipe;
pub mod grocery;
pub mod catalog;

pub use recipe::Recipe;
pub use grocery::GroceryCategory;
pub use catalog::{Catalog, CatalogError};
