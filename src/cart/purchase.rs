//! Endpoint for purchasing a cart.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    cart::{CartId, purchase_cart},
};

/// The state needed for purchasing a cart.
#[derive(Debug, Clone)]
pub struct PurchaseCartState {
    /// Handle to the application database.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for PurchaseCartState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Handle requests to purchase a cart.
///
/// Purchasing is final: the cart becomes immutable and purchasing it a
/// second time is rejected.
pub async fn purchase_cart_endpoint(
    State(state): State<PurchaseCartState>,
    Path(cart_id): Path<CartId>,
) -> Response {
    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_response();
        }
    };

    match purchase_cart(cart_id, &connection) {
        Ok(cart) => Json(cart).into_response(),
        Err(error) => error.into_response(),
    }
}
