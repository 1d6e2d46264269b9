//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/api/carts/{cart_id}', use [format_endpoint].

/// The route to list all product categories.
pub const CATEGORIES: &str = "/api/categories";
/// The route to query the product catalog.
pub const PRODUCTS: &str = "/api/products";
/// The route to list the products frequently bought together with a product.
pub const BOUGHT_TOGETHER: &str = "/api/products/{product_id}/bought-together";
/// The route to create a new cart.
pub const CARTS: &str = "/api/carts";
/// The route to view a single cart with its line totals.
pub const CART: &str = "/api/carts/{cart_id}";
/// The route to add an item to a cart.
pub const CART_ITEMS: &str = "/api/carts/{cart_id}/items";
/// The route to remove an item from a cart.
pub const CART_ITEM: &str = "/api/carts/{cart_id}/items/{item_id}";
/// The route to purchase a cart.
pub const PURCHASE_CART: &str = "/api/carts/{cart_id}/purchase";
/// The route to the nutrition breakdown of a cart.
pub const CART_NUTRITION: &str = "/api/carts/{cart_id}/nutrition";
/// The route to list purchased carts, most recent first.
pub const PURCHASES: &str = "/api/purchases";
/// The route to the statistics over all purchased carts.
pub const PURCHASE_STATISTICS: &str = "/api/purchases/statistics";
/// The route to the recommended cart built from purchase history.
pub const RECOMMENDATIONS: &str = "/api/recommendations";

/// Replace the first parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/api/carts/{cart_id}', '{cart_id}' is
/// the parameter.
///
/// For paths with more than one parameter, such as [CART_ITEM], apply this
/// function once per parameter. If no parameter is found in `endpoint_path`,
/// the function returns the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_string();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|offset| param_start + offset + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
