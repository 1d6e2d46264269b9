//! Purchase statistics endpoint.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    purchase::{get_purchased_carts, purchase_statistics},
};

/// The state needed for computing purchase statistics.
#[derive(Debug, Clone)]
pub struct PurchaseStatisticsState {
    /// Handle to the application database.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for PurchaseStatisticsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Handle requests for the statistics over all purchased carts.
pub async fn purchase_statistics_endpoint(
    State(state): State<PurchaseStatisticsState>,
) -> Response {
    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_response();
        }
    };

    match get_purchased_carts(&connection) {
        Ok(purchases) => Json(purchase_statistics(&purchases)).into_response(),
        Err(error) => error.into_response(),
    }
}
