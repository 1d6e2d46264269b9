//! Products in the catalog and the queries over them.

mod db;
mod domain;
mod list;

pub use db::{create_product, create_product_table, get_product, query_products};
pub use domain::{Product, ProductId, ProductQuery, ProductSortBy, ProductSummary};
pub use list::list_products_endpoint;
