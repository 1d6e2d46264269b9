//! Product catalog query endpoint.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    product::{ProductQuery, query_products},
};

/// The state needed for querying the product catalog.
#[derive(Debug, Clone)]
pub struct ListProductsState {
    /// Handle to the application database.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for ListProductsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Handle requests for the product list.
///
/// Accepts `search`, `category_id` and `sort_by` query-string parameters.
pub async fn list_products_endpoint(
    State(state): State<ListProductsState>,
    Query(filter): Query<ProductQuery>,
) -> Response {
    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_response();
        }
    };

    match query_products(&filter, &connection) {
        Ok(products) => Json(products).into_response(),
        Err(error) => error.into_response(),
    }
}
