//! Cart view: a cart with its line items and totals computed at read time.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    cart::{CartId, CartLineView, CartView, get_cart},
};

/// Retrieve a cart together with its line items.
///
/// Line totals and the cart total are computed from the current product
/// prices at read time, they are never stored.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if the cart does not exist,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn get_cart_view(cart_id: CartId, connection: &Connection) -> Result<CartView, Error> {
    let cart = get_cart(cart_id, connection)?;

    let items: Vec<CartLineView> = connection
        .prepare(
            "SELECT cart_item.id, product.name, product.price, cart_item.quantity
             FROM cart_item INNER JOIN product ON product.id = cart_item.product_id
             WHERE cart_item.cart_id = :cart_id
             ORDER BY cart_item.id ASC;",
        )?
        .query_map(&[(":cart_id", &cart_id)], |row| {
            let price: f64 = row.get(2)?;
            let quantity: i64 = row.get(3)?;

            Ok(CartLineView {
                id: row.get(0)?,
                product_name: row.get(1)?,
                price,
                quantity,
                total: price * quantity as f64,
            })
        })?
        .map(|maybe_line| maybe_line.map_err(Error::SqlError))
        .collect::<Result<_, _>>()?;

    let total = items.iter().map(|line| line.total).sum();

    Ok(CartView {
        id: cart.id,
        is_purchased: cart.is_purchased,
        items,
        total,
    })
}

/// The state needed for viewing a cart.
#[derive(Debug, Clone)]
pub struct GetCartState {
    /// Handle to the application database.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for GetCartState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Handle requests for a single cart with its line totals.
pub async fn get_cart_endpoint(
    State(state): State<GetCartState>,
    Path(cart_id): Path<CartId>,
) -> Response {
    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_response();
        }
    };

    match get_cart_view(cart_id, &connection) {
        Ok(view) => Json(view).into_response(),
        Err(error) => error.into_response(),
    }
}

#[cfg(test)]
mod cart_view_tests {
    use crate::{
        Error,
        cart::{add_item, create_cart},
        test_utils::seed_test_catalog,
    };

    use super::get_cart_view;

    #[test]
    fn view_of_missing_cart_returns_not_found() {
        let connection = seed_test_catalog();

        let result = get_cart_view(999, &connection);

        assert_eq!(result, Err(Error::NotFound));
    }

    #[test]
    fn view_of_empty_cart_has_zero_total() {
        let connection = seed_test_catalog();
        let cart = create_cart(&connection).unwrap();

        let view = get_cart_view(cart.id, &connection).unwrap();

        assert!(view.items.is_empty());
        assert_eq!(view.total, 0.0);
        assert!(!view.is_purchased);
    }

    #[test]
    fn view_computes_line_and_cart_totals() {
        let connection = seed_test_catalog();
        let cart = create_cart(&connection).unwrap();
        // Product 1 costs 1.5 per unit, product 3 costs 2.9 per unit.
        add_item(cart.id, 1, 2, &connection).unwrap();
        add_item(cart.id, 3, 1, &connection).unwrap();

        let view = get_cart_view(cart.id, &connection).unwrap();

        assert_eq!(view.items.len(), 2);
        assert_eq!(view.items[0].total, 3.0);
        assert_eq!(view.items[1].total, 2.9);
        assert_eq!(view.total, 3.0 + 2.9);
    }

    #[test]
    fn view_reproduces_added_items() {
        let connection = seed_test_catalog();
        let cart = create_cart(&connection).unwrap();
        add_item(cart.id, 1, 2, &connection).unwrap();
        add_item(cart.id, 1, 1, &connection).unwrap();

        let view = get_cart_view(cart.id, &connection).unwrap();

        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].quantity, 3);
        assert_eq!(view.total, view.items[0].price * 3.0);
    }
}
