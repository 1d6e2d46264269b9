//! Endpoint for adding an item to a cart.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    cart::{AddItemData, CartId, add_item},
};

/// The state needed for adding an item to a cart.
#[derive(Debug, Clone)]
pub struct AddItemState {
    /// Handle to the application database.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for AddItemState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Handle requests to add a product to a cart.
///
/// Adding a product already in the cart increments its quantity. Responds
/// with the line item as stored after the update.
pub async fn add_item_endpoint(
    State(state): State<AddItemState>,
    Path(cart_id): Path<CartId>,
    Json(data): Json<AddItemData>,
) -> Response {
    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_response();
        }
    };

    match add_item(cart_id, data.product_id, data.quantity, &connection) {
        Ok(item) => (StatusCode::CREATED, Json(item)).into_response(),
        Err(error) => error.into_response(),
    }
}
