//! Core cart domain types.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::product::ProductId;

/// Database identifier for a cart.
pub type CartId = i64;

/// Database identifier for a cart line item.
pub type CartItemId = i64;

/// A shopping cart.
///
/// Invariant: `purchased_at` is set if and only if `is_purchased` is true.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub id: CartId,
    pub created_at: OffsetDateTime,
    pub is_purchased: bool,
    pub purchased_at: Option<OffsetDateTime>,
}

/// A line item: one product and its quantity within a cart.
///
/// A cart holds at most one line item per product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: CartItemId,
    pub cart_id: CartId,
    pub product_id: ProductId,
    pub quantity: i64,
}

/// JSON body for adding an item to a cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddItemData {
    /// The product to add.
    pub product_id: ProductId,

    /// How many units to add. Defaults to one when omitted.
    #[serde(default = "default_quantity")]
    pub quantity: i64,
}

fn default_quantity() -> i64 {
    1
}

/// One line of a cart view with its total computed at read time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineView {
    pub id: CartItemId,
    pub product_name: String,
    pub price: f64,
    pub quantity: i64,
    /// `price` multiplied by `quantity`.
    pub total: f64,
}

/// A cart with its line items and computed total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartView {
    pub id: CartId,
    pub is_purchased: bool,
    pub items: Vec<CartLineView>,
    /// Sum of the line totals.
    pub total: f64,
}
