//! Core product domain types.

use serde::{Deserialize, Serialize};

use crate::category::CategoryId;

/// Database identifier for a product.
pub type ProductId = i64;

/// A product in the catalog, priced per unit.
///
/// Like categories, products are seeded once and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category_id: CategoryId,
}

/// A product as presented in catalog listings, carrying its category name
/// instead of the category ID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
}

/// The ordering key for product queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductSortBy {
    /// Order by product name, the default.
    #[default]
    Name,
    /// Order by unit price, cheapest first.
    Price,
}

/// Filters for querying the product catalog.
///
/// Doubles as the query-string parameters of the product list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductQuery {
    /// Substring to match against product names. An empty or missing string
    /// matches everything.
    pub search: Option<String>,

    /// Restrict results to a single category.
    pub category_id: Option<CategoryId>,

    /// The ordering key. Ties are broken by insertion order.
    #[serde(default)]
    pub sort_by: ProductSortBy,
}
