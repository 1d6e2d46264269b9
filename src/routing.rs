//! Application router configuration.

use axum::{
    Router, middleware,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};

use crate::{
    AppState, Error,
    cart::{
        add_item_endpoint, cart_nutrition_endpoint, create_cart_endpoint, get_cart_endpoint,
        purchase_cart_endpoint, remove_item_endpoint,
    },
    category::list_categories_endpoint,
    endpoints,
    logging::logging_middleware,
    product::list_products_endpoint,
    purchase::{
        bought_together_endpoint, list_purchases_endpoint, purchase_statistics_endpoint,
        recommend_cart_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::CATEGORIES, get(list_categories_endpoint))
        .route(endpoints::PRODUCTS, get(list_products_endpoint))
        .route(endpoints::BOUGHT_TOGETHER, get(bought_together_endpoint))
        .route(endpoints::CARTS, post(create_cart_endpoint))
        .route(endpoints::CART, get(get_cart_endpoint))
        .route(endpoints::CART_ITEMS, post(add_item_endpoint))
        .route(endpoints::CART_ITEM, delete(remove_item_endpoint))
        .route(endpoints::PURCHASE_CART, post(purchase_cart_endpoint))
        .route(endpoints::CART_NUTRITION, get(cart_nutrition_endpoint))
        .route(endpoints::PURCHASES, get(list_purchases_endpoint))
        .route(
            endpoints::PURCHASE_STATISTICS,
            get(purchase_statistics_endpoint),
        )
        .route(endpoints::RECOMMENDATIONS, get(recommend_cart_endpoint))
        .fallback(get_unknown_route)
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
}

/// Requests outside the API surface get the same JSON error shape as a
/// missing resource.
async fn get_unknown_route() -> Response {
    Error::NotFound.into_response()
}
