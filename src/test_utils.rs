#![allow(missing_docs)]
//! Helpers shared by the unit tests.

use axum::response::Response;
use rusqlite::Connection;

use crate::{category::create_category, db::initialize, product::create_product};

/// Open an in-memory SQLite database with the full schema.
pub(crate) fn get_test_db_connection() -> Connection {
    let connection = Connection::open_in_memory().expect("Could not open in-memory database");
    initialize(&connection).expect("Could not initialize database");
    connection
}

/// An in-memory database seeded with a small, fixed catalog.
///
/// Categories: 1 Dairy, 2 Fruits, 3 Vegetables, 4 Meat.
/// Products: 1 Fresh Milk 1L (Dairy, 1.5), 2 Greek Yogurt (Dairy, 2.8),
/// 3 Red Apples (Fruits, 2.9), 4 Tomatoes (Vegetables, 2.4),
/// 5 Chicken Breast (Meat, 8.9).
pub(crate) fn seed_test_catalog() -> Connection {
    let connection = get_test_db_connection();

    let dairy = create_category("Dairy", &connection).unwrap();
    let fruits = create_category("Fruits", &connection).unwrap();
    let vegetables = create_category("Vegetables", &connection).unwrap();
    let meat = create_category("Meat", &connection).unwrap();

    create_product("Fresh Milk 1L", "Fresh cow milk", 1.5, dairy.id, &connection).unwrap();
    create_product("Greek Yogurt", "Traditional yogurt", 2.8, dairy.id, &connection).unwrap();
    create_product("Red Apples", "Fresh red apples", 2.9, fruits.id, &connection).unwrap();
    create_product("Tomatoes", "Fresh tomatoes", 2.4, vegetables.id, &connection).unwrap();
    create_product("Chicken Breast", "Fresh chicken breast", 8.9, meat.id, &connection).unwrap();

    connection
}

/// Read a response body to completion and parse it as JSON.
pub(crate) async fn parse_json_body(response: Response) -> serde_json::Value {
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Could not read response body");

    serde_json::from_slice(&body_bytes).expect("Response body was not valid JSON")
}
