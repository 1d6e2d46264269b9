//! Purchase history and the aggregate queries computed over it.
//!
//! This module contains everything derived from purchased carts:
//! - The snapshot loader that materializes purchased carts with their items
//! - The aggregation functions: purchase statistics, the recommended cart,
//!   and frequently-bought-together products
//! - The endpoints serving the purchase history and the aggregates

mod aggregation;
mod bought_together;
mod db;
mod domain;
mod history;
mod recommend;
mod stats;

pub use aggregation::{
    frequently_bought_together, purchase_history, purchase_statistics, recommend_cart,
};
pub use bought_together::bought_together_endpoint;
pub use db::get_purchased_carts;
pub use domain::{
    CoPurchasedProduct, PopularProduct, PurchaseRecord, PurchaseStatistics, PurchasedCart,
    PurchasedItem, PurchasedLine, Recommendation,
};
pub use history::list_purchases_endpoint;
pub use recommend::recommend_cart_endpoint;
pub use stats::purchase_statistics_endpoint;
