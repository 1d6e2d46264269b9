//! Shopping carts: creation, line item mutation, purchase, and views.
//!
//! A cart starts open and empty. While open, items can be added (adding an
//! existing product increments its quantity), removed, and the cart can be
//! purchased exactly once. Once purchased, the cart and its items are
//! immutable and every further mutation is rejected.

mod add_item;
mod create;
mod db;
mod domain;
mod nutrition;
mod purchase;
mod remove_item;
mod view;

pub use add_item::add_item_endpoint;
pub use create::create_cart_endpoint;
pub use db::{add_item, create_cart, create_cart_tables, get_cart, purchase_cart, remove_item};
pub use domain::{AddItemData, Cart, CartId, CartItem, CartItemId, CartLineView, CartView};
pub use nutrition::cart_nutrition_endpoint;
pub use purchase::purchase_cart_endpoint;
pub use remove_item::remove_item_endpoint;
pub use view::{get_cart_endpoint, get_cart_view};
