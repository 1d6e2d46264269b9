//! Purchase history endpoint.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    purchase::{get_purchased_carts, purchase_history},
};

/// The state needed for listing purchased carts.
#[derive(Debug, Clone)]
pub struct ListPurchasesState {
    /// Handle to the application database.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for ListPurchasesState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Handle requests for the purchase history, most recent purchase first.
pub async fn list_purchases_endpoint(State(state): State<ListPurchasesState>) -> Response {
    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_response();
        }
    };

    match get_purchased_carts(&connection) {
        Ok(purchases) => Json(purchase_history(&purchases)).into_response(),
        Err(error) => error.into_response(),
    }
}
