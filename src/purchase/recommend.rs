//! Recommended cart endpoint.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    purchase::{get_purchased_carts, recommend_cart},
};

/// The state needed for building the recommended cart.
#[derive(Debug, Clone)]
pub struct RecommendCartState {
    /// Handle to the application database.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for RecommendCartState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Handle requests for the recommended cart built from purchase history.
pub async fn recommend_cart_endpoint(State(state): State<RecommendCartState>) -> Response {
    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_response();
        }
    };

    match get_purchased_carts(&connection) {
        Ok(purchases) => Json(recommend_cart(&purchases)).into_response(),
        Err(error) => error.into_response(),
    }
}
