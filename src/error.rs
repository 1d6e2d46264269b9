//! Defines the app level error type and its conversion to JSON HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the parameters
    /// (e.g., ID) are correct and that the resource has been created.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// The client tried to modify or re-purchase a cart that has already
    /// been purchased. Purchased carts and their items are immutable.
    #[error("the cart has already been purchased and can no longer be modified")]
    CartAlreadyPurchased,

    /// A quantity of less than one was used to add an item to a cart.
    #[error("{0} is not a valid quantity, quantities must be at least one")]
    InvalidQuantity(i64),

    /// A negative price was used to create a product.
    #[error("{0} is not a valid price, prices must not be negative")]
    NegativePrice(f64),

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status_code = match &self {
            Error::NotFound => StatusCode::NOT_FOUND,
            Error::CartAlreadyPurchased => StatusCode::CONFLICT,
            Error::InvalidQuantity(_) | Error::NegativePrice(_) => StatusCode::BAD_REQUEST,
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);

                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"error": "internal server error"})),
                )
                    .into_response();
            }
        };

        (status_code, Json(json!({"error": self.to_string()}))).into_response()
    }
}

#[cfg(test)]
mod error_tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::{Error, test_utils::parse_json_body};

    #[test]
    fn no_rows_converts_to_not_found() {
        let error = Error::from(rusqlite::Error::QueryReturnedNoRows);

        assert_eq!(error, Error::NotFound);
    }

    #[tokio::test]
    async fn not_found_maps_to_404_with_json_body() {
        let response = Error::NotFound.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = parse_json_body(response).await;
        assert_eq!(
            body["error"],
            "the requested resource could not be found".to_string()
        );
    }

    #[tokio::test]
    async fn purchased_cart_maps_to_409() {
        let response = Error::CartAlreadyPurchased.into_response();

        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn invalid_quantity_maps_to_400() {
        let response = Error::InvalidQuantity(0).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn sql_error_maps_to_500_with_generic_body() {
        let response = Error::SqlError(rusqlite::Error::InvalidQuery).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = parse_json_body(response).await;
        assert_eq!(body["error"], "internal server error".to_string());
    }
}
