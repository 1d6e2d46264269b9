//! Types describing purchased carts and the aggregates computed over them.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{cart::CartId, product::ProductId};

/// A line item of a purchased cart, denormalized with the product's name and
/// unit price so the aggregations need no further lookups.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchasedItem {
    pub product_id: ProductId,
    pub product_name: String,
    pub price: f64,
    pub quantity: i64,
}

/// A cart that has been purchased, with all of its line items.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchasedCart {
    pub cart_id: CartId,
    pub purchased_at: OffsetDateTime,
    pub items: Vec<PurchasedItem>,
}

/// A product ranked by total quantity across all purchased carts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopularProduct {
    pub name: String,
    /// Summed quantity across all purchased carts.
    pub count: i64,
}

/// Summary statistics over all purchased carts.
///
/// All values are zero and the top list empty when nothing has been
/// purchased yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseStatistics {
    pub total_purchases: i64,
    pub total_spent: f64,
    pub average_per_purchase: f64,
    pub most_popular_products: Vec<PopularProduct>,
}

/// A product suggested for the recommended cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub product_id: ProductId,
    pub name: String,
    pub price: f64,
    /// Always one, regardless of how much of the product history holds.
    pub suggested_quantity: i64,
}

/// A product that appears in purchased carts together with another product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoPurchasedProduct {
    pub product_id: ProductId,
    pub name: String,
    pub price: f64,
    /// The number of purchased carts both products appear in, irrespective
    /// of quantities.
    pub frequency: i64,
}

/// One line of a purchased cart as presented in the purchase history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchasedLine {
    pub product_name: String,
    pub price: f64,
    pub quantity: i64,
    /// `price` multiplied by `quantity`.
    pub total: f64,
}

/// A purchased cart as presented in the purchase history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    pub id: CartId,
    pub purchased_at: OffsetDateTime,
    pub items: Vec<PurchasedLine>,
    /// Sum of the line totals.
    pub total: f64,
}
