//! Nutrition breakdown for a cart.
//!
//! Aggregates a cart's item quantities per category name and derives short
//! dietary advice from the breakdown.

use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex},
};

use axum::{
    Json,
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::{
    AppState, Error,
    cart::{CartId, get_cart},
};

/// How much meat a single cart can hold before the advice suggests cutting
/// back.
const MEAT_QUANTITY_LIMIT: i64 = 3;

/// Quantity of items per category within one cart, with derived advice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionView {
    pub cart_id: CartId,
    /// Total item quantity per category name.
    pub categories: BTreeMap<String, i64>,
    /// Human-readable dietary advice derived from the breakdown.
    pub analysis: String,
}

/// Aggregate a cart's item quantities per category and derive advice.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if the cart does not exist,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn nutrition_analysis(
    cart_id: CartId,
    connection: &Connection,
) -> Result<NutritionView, Error> {
    get_cart(cart_id, connection)?;

    let mut categories = BTreeMap::new();

    let mut statement = connection
        .prepare(
            "SELECT category.name, cart_item.quantity
             FROM cart_item
             INNER JOIN product ON product.id = cart_item.product_id
             INNER JOIN category ON category.id = product.category_id
             WHERE cart_item.cart_id = :cart_id;",
        )?;
    let quantities = statement
        .query_map(&[(":cart_id", &cart_id)], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
        })?;

    for maybe_quantity in quantities {
        let (category_name, quantity) = maybe_quantity?;
        *categories.entry(category_name).or_insert(0) += quantity;
    }

    let analysis = dietary_advice(&categories);

    Ok(NutritionView {
        cart_id,
        categories,
        analysis,
    })
}

fn dietary_advice(categories: &BTreeMap<String, i64>) -> String {
    let mut advice = String::from("Nutritional analysis: ");

    if categories.contains_key("Fruits") && categories.contains_key("Vegetables") {
        advice.push_str("Good variety of fruits and vegetables. ");
    }

    if categories.contains_key("Dairy") {
        advice.push_str("Good calcium intake. ");
    }

    if categories.get("Meat").copied().unwrap_or(0) > MEAT_QUANTITY_LIMIT {
        advice.push_str("Consider reducing meat consumption. ");
    }

    advice.push_str("Try to maintain a balanced diet.");

    advice
}

/// The state needed for the nutrition breakdown of a cart.
#[derive(Debug, Clone)]
pub struct CartNutritionState {
    /// Handle to the application database.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for CartNutritionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Handle requests for the nutrition breakdown of a cart.
pub async fn cart_nutrition_endpoint(
    State(state): State<CartNutritionState>,
    Path(cart_id): Path<CartId>,
) -> Response {
    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_response();
        }
    };

    match nutrition_analysis(cart_id, &connection) {
        Ok(view) => Json(view).into_response(),
        Err(error) => error.into_response(),
    }
}
