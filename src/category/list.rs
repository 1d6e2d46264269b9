//! Category listing endpoint.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use rusqlite::Connection;

use crate::{AppState, Error, category::get_all_categories};

/// The state needed for listing categories.
#[derive(Debug, Clone)]
pub struct ListCategoriesState {
    /// Handle to the application database.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for ListCategoriesState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Handle requests for the category list.
pub async fn list_categories_endpoint(State(state): State<ListCategoriesState>) -> Response {
    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_response();
        }
    };

    match get_all_categories(&connection) {
        Ok(categories) => Json(categories).into_response(),
        Err(error) => error.into_response(),
    }
}

#[cfg(test)]
mod list_categories_endpoint_tests {
    use std::sync::{Arc, Mutex};

    use axum::{extract::State, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::{
        category::{create_category, list::ListCategoriesState},
        test_utils::{get_test_db_connection, parse_json_body},
    };

    use super::list_categories_endpoint;

    #[tokio::test]
    async fn lists_all_categories_as_json() {
        let connection = get_test_db_connection();
        create_category("Dairy", &connection).unwrap();
        create_category("Fruits", &connection).unwrap();
        let state = ListCategoriesState {
            db_connection: Arc::new(Mutex::new(connection)),
        };

        let response = list_categories_endpoint(State(state)).await.into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let body = parse_json_body(response).await;
        assert_eq!(
            body,
            json!([
                {"id": 1, "name": "Dairy"},
                {"id": 2, "name": "Fruits"},
            ])
        );
    }

    #[tokio::test]
    async fn lists_empty_catalog_as_empty_array() {
        let state = ListCategoriesState {
            db_connection: Arc::new(Mutex::new(get_test_db_connection())),
        };

        let response = list_categories_endpoint(State(state)).await.into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(parse_json_body(response).await, json!([]));
    }
}
