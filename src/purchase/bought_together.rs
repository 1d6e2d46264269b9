//! Frequently-bought-together endpoint.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    product::{ProductId, get_product},
    purchase::{frequently_bought_together, get_purchased_carts},
};

/// The state needed for finding frequently co-purchased products.
#[derive(Debug, Clone)]
pub struct BoughtTogetherState {
    /// Handle to the application database.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for BoughtTogetherState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Handle requests for the products frequently bought together with a
/// product.
///
/// Responds with 404 if the product itself does not exist; a product with no
/// co-purchases gets an empty list.
pub async fn bought_together_endpoint(
    State(state): State<BoughtTogetherState>,
    Path(product_id): Path<ProductId>,
) -> Response {
    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_response();
        }
    };

    if let Err(error) = get_product(product_id, &connection) {
        return error.into_response();
    }

    match get_purchased_carts(&connection) {
        Ok(purchases) => Json(frequently_bought_together(product_id, &purchases)).into_response(),
        Err(error) => error.into_response(),
    }
}

#[cfg(test)]
mod bought_together_endpoint_tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::{Path, State},
        http::StatusCode,
        response::IntoResponse,
    };
    use serde_json::json;

    use crate::{
        cart::{add_item, create_cart, purchase_cart},
        purchase::bought_together::BoughtTogetherState,
        test_utils::{parse_json_body, seed_test_catalog},
    };

    use super::bought_together_endpoint;

    #[tokio::test]
    async fn missing_product_gives_404() {
        let state = BoughtTogetherState {
            db_connection: Arc::new(Mutex::new(seed_test_catalog())),
        };

        let response = bought_together_endpoint(State(state), Path(999))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn product_without_co_purchases_gives_empty_list() {
        let state = BoughtTogetherState {
            db_connection: Arc::new(Mutex::new(seed_test_catalog())),
        };

        let response = bought_together_endpoint(State(state), Path(1))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(parse_json_body(response).await, json!([]));
    }

    #[tokio::test]
    async fn reports_companions_by_cart_count() {
        let connection = seed_test_catalog();
        let cart = create_cart(&connection).unwrap();
        add_item(cart.id, 1, 1, &connection).unwrap();
        add_item(cart.id, 2, 5, &connection).unwrap();
        purchase_cart(cart.id, &connection).unwrap();
        let state = BoughtTogetherState {
            db_connection: Arc::new(Mutex::new(connection)),
        };

        let response = bought_together_endpoint(State(state), Path(1))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let body = parse_json_body(response).await;
        assert_eq!(body[0]["product_id"], 2);
        // One shared cart contributes one, not the companion's quantity.
        assert_eq!(body[0]["frequency"], 1);
    }
}
