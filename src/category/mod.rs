//! Product categories for the catalog.

mod db;
mod domain;
mod list;

pub use db::{create_category, create_category_table, get_all_categories};
pub use domain::{Category, CategoryId};
pub use list::list_categories_endpoint;
