//! Endpoint for removing an item from a cart.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    cart::{CartId, CartItemId, remove_item},
};

/// The state needed for removing an item from a cart.
#[derive(Debug, Clone)]
pub struct RemoveItemState {
    /// Handle to the application database.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for RemoveItemState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Handle requests to remove a line item from a cart.
pub async fn remove_item_endpoint(
    State(state): State<RemoveItemState>,
    Path((cart_id, item_id)): Path<(CartId, CartItemId)>,
) -> Response {
    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_response();
        }
    };

    match remove_item(cart_id, item_id, &connection) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error.into_response(),
    }
}
