//! Cart creation endpoint.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
    http::{StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
};
use rusqlite::Connection;

use crate::{AppState, Error, cart::create_cart, endpoints};

/// The state needed for creating a cart.
#[derive(Debug, Clone)]
pub struct CreateCartState {
    /// Handle to the application database.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for CreateCartState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Handle requests to create a new, empty cart.
///
/// Responds with 201 Created, the new cart as JSON, and a Location header
/// pointing at the cart view.
pub async fn create_cart_endpoint(State(state): State<CreateCartState>) -> Response {
    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_response();
        }
    };

    match create_cart(&connection) {
        Ok(cart) => (
            StatusCode::CREATED,
            [(LOCATION, endpoints::format_endpoint(endpoints::CART, cart.id))],
            Json(cart),
        )
            .into_response(),
        Err(error) => error.into_response(),
    }
}
