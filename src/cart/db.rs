//! Database operations for carts and their line items.

use rusqlite::{Connection, Row};
use time::OffsetDateTime;

use crate::{
    Error,
    cart::{Cart, CartId, CartItem, CartItemId},
    product::{ProductId, get_product},
};

/// Create a new, open cart stamped with the current time.
pub fn create_cart(connection: &Connection) -> Result<Cart, Error> {
    let created_at = OffsetDateTime::now_utc();

    connection.execute(
        "INSERT INTO cart (created_at, is_purchased) VALUES (?1, 0);",
        (created_at,),
    )?;

    Ok(Cart {
        id: connection.last_insert_rowid(),
        created_at,
        is_purchased: false,
        purchased_at: None,
    })
}

/// Retrieve a single cart by ID.
pub fn get_cart(cart_id: CartId, connection: &Connection) -> Result<Cart, Error> {
    connection
        .prepare("SELECT id, created_at, is_purchased, purchased_at FROM cart WHERE id = :id;")?
        .query_row(&[(":id", &cart_id)], map_cart_row)
        .map_err(|error| error.into())
}

/// Add `quantity` units of a product to an open cart.
///
/// If the cart already holds a line item for the product, the quantity is
/// added to it; otherwise a new line item is created. Returns the line item
/// as stored after the update. The whole operation runs in one SQL
/// transaction.
///
/// # Errors
/// This function will return a:
/// - [Error::InvalidQuantity] if `quantity` is less than one,
/// - [Error::NotFound] if the cart or the product does not exist,
/// - [Error::CartAlreadyPurchased] if the cart has been purchased,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn add_item(
    cart_id: CartId,
    product_id: ProductId,
    quantity: i64,
    connection: &Connection,
) -> Result<CartItem, Error> {
    if quantity < 1 {
        return Err(Error::InvalidQuantity(quantity));
    }

    let transaction = connection.unchecked_transaction()?;

    let cart = get_cart(cart_id, &transaction)?;
    if cart.is_purchased {
        return Err(Error::CartAlreadyPurchased);
    }

    get_product(product_id, &transaction)?;

    let item = transaction
        .prepare(
            "INSERT INTO cart_item (cart_id, product_id, quantity) VALUES (?1, ?2, ?3)
             ON CONFLICT(cart_id, product_id) DO UPDATE SET quantity = quantity + excluded.quantity
             RETURNING id, cart_id, product_id, quantity;",
        )?
        .query_row((cart_id, product_id, quantity), map_item_row)?;

    transaction.commit()?;

    Ok(item)
}

/// Remove a line item from an open cart.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if no item with `item_id` belongs to the cart with
///   `cart_id` (an item ID that exists under a different cart still counts
///   as not found),
/// - [Error::CartAlreadyPurchased] if the cart has been purchased,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn remove_item(
    cart_id: CartId,
    item_id: CartItemId,
    connection: &Connection,
) -> Result<(), Error> {
    let transaction = connection.unchecked_transaction()?;

    let cart = get_cart(cart_id, &transaction)?;
    if cart.is_purchased {
        return Err(Error::CartAlreadyPurchased);
    }

    let rows_affected = transaction.execute(
        "DELETE FROM cart_item WHERE id = ?1 AND cart_id = ?2;",
        (item_id, cart_id),
    )?;

    if rows_affected == 0 {
        return Err(Error::NotFound);
    }

    transaction.commit()?;

    Ok(())
}

/// Mark an open cart as purchased, stamping it with the current time.
///
/// Purchasing is final: the cart and its items become immutable, and
/// re-purchasing is rejected rather than refreshing the timestamp.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if the cart does not exist,
/// - [Error::CartAlreadyPurchased] if the cart has already been purchased,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn purchase_cart(cart_id: CartId, connection: &Connection) -> Result<Cart, Error> {
    let transaction = connection.unchecked_transaction()?;

    let cart = get_cart(cart_id, &transaction)?;
    if cart.is_purchased {
        return Err(Error::CartAlreadyPurchased);
    }

    let purchased_at = OffsetDateTime::now_utc();
    transaction.execute(
        "UPDATE cart SET is_purchased = 1, purchased_at = ?1 WHERE id = ?2;",
        (purchased_at, cart_id),
    )?;

    transaction.commit()?;

    Ok(Cart {
        is_purchased: true,
        purchased_at: Some(purchased_at),
        ..cart
    })
}

/// Initialize the cart and cart item tables and indexes.
pub fn create_cart_tables(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS cart (
            id INTEGER PRIMARY KEY,
            created_at TEXT NOT NULL,
            is_purchased INTEGER NOT NULL DEFAULT 0,
            purchased_at TEXT
        );

        CREATE TABLE IF NOT EXISTS cart_item (
            id INTEGER PRIMARY KEY,
            cart_id INTEGER NOT NULL,
            product_id INTEGER NOT NULL,
            quantity INTEGER NOT NULL,
            FOREIGN KEY(cart_id) REFERENCES cart(id),
            FOREIGN KEY(product_id) REFERENCES product(id),
            UNIQUE(cart_id, product_id)
        );

        CREATE INDEX IF NOT EXISTS idx_cart_item_cart ON cart_item(cart_id);
        CREATE INDEX IF NOT EXISTS idx_cart_item_product ON cart_item(product_id);",
    )?;

    Ok(())
}

fn map_cart_row(row: &Row) -> Result<Cart, rusqlite::Error> {
    Ok(Cart {
        id: row.get(0)?,
        created_at: row.get(1)?,
        is_purchased: row.get(2)?,
        purchased_at: row.get(3)?,
    })
}

fn map_item_row(row: &Row) -> Result<CartItem, rusqlite::Error> {
    Ok(CartItem {
        id: row.get(0)?,
        cart_id: row.get(1)?,
        product_id: row.get(2)?,
        quantity: row.get(3)?,
    })
}

#[cfg(test)]
mod cart_mutation_tests {
    use rusqlite::Connection;

    use crate::{Error, test_utils::seed_test_catalog};

    use super::{add_item, create_cart, get_cart, purchase_cart, remove_item};

    fn count_items(cart_id: i64, connection: &Connection) -> i64 {
        connection
            .query_row(
                "SELECT COUNT(*) FROM cart_item WHERE cart_id = ?1",
                [cart_id],
                |row| row.get(0),
            )
            .unwrap()
    }

    #[test]
    fn create_cart_starts_open_and_empty() {
        let connection = seed_test_catalog();

        let cart = create_cart(&connection).expect("Could not create cart");

        assert!(cart.id > 0);
        assert!(!cart.is_purchased);
        assert_eq!(cart.purchased_at, None);
        assert_eq!(count_items(cart.id, &connection), 0);
    }

    #[test]
    fn get_cart_with_invalid_id_returns_not_found() {
        let connection = seed_test_catalog();

        let result = get_cart(999, &connection);

        assert_eq!(result, Err(Error::NotFound));
    }

    #[test]
    fn add_item_creates_a_line_item() {
        let connection = seed_test_catalog();
        let cart = create_cart(&connection).unwrap();

        let item = add_item(cart.id, 1, 2, &connection).expect("Could not add item");

        assert_eq!(item.cart_id, cart.id);
        assert_eq!(item.product_id, 1);
        assert_eq!(item.quantity, 2);
    }

    #[test]
    fn adding_same_product_twice_merges_quantities() {
        let connection = seed_test_catalog();
        let cart = create_cart(&connection).unwrap();

        let first = add_item(cart.id, 1, 2, &connection).unwrap();
        let second = add_item(cart.id, 1, 3, &connection).unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(second.quantity, 5);
        assert_eq!(count_items(cart.id, &connection), 1);
    }

    #[test]
    fn add_item_rejects_zero_quantity() {
        let connection = seed_test_catalog();
        let cart = create_cart(&connection).unwrap();

        let result = add_item(cart.id, 1, 0, &connection);

        assert_eq!(result, Err(Error::InvalidQuantity(0)));
        assert_eq!(count_items(cart.id, &connection), 0);
    }

    #[test]
    fn add_item_to_missing_cart_returns_not_found() {
        let connection = seed_test_catalog();

        let result = add_item(999, 1, 1, &connection);

        assert_eq!(result, Err(Error::NotFound));
    }

    #[test]
    fn add_missing_product_returns_not_found() {
        let connection = seed_test_catalog();
        let cart = create_cart(&connection).unwrap();

        let result = add_item(cart.id, 999, 1, &connection);

        assert_eq!(result, Err(Error::NotFound));
        assert_eq!(count_items(cart.id, &connection), 0);
    }

    #[test]
    fn add_item_to_purchased_cart_fails_and_mutates_nothing() {
        let connection = seed_test_catalog();
        let cart = create_cart(&connection).unwrap();
        add_item(cart.id, 1, 1, &connection).unwrap();
        purchase_cart(cart.id, &connection).unwrap();

        let result = add_item(cart.id, 2, 1, &connection);

        assert_eq!(result, Err(Error::CartAlreadyPurchased));
        assert_eq!(count_items(cart.id, &connection), 1);
    }

    #[test]
    fn remove_item_deletes_the_line_item() {
        let connection = seed_test_catalog();
        let cart = create_cart(&connection).unwrap();
        let item = add_item(cart.id, 1, 1, &connection).unwrap();

        let result = remove_item(cart.id, item.id, &connection);

        assert_eq!(result, Ok(()));
        assert_eq!(count_items(cart.id, &connection), 0);
    }

    #[test]
    fn remove_item_from_other_cart_returns_not_found() {
        let connection = seed_test_catalog();
        let cart = create_cart(&connection).unwrap();
        let other_cart = create_cart(&connection).unwrap();
        let item = add_item(other_cart.id, 1, 1, &connection).unwrap();

        let result = remove_item(cart.id, item.id, &connection);

        assert_eq!(result, Err(Error::NotFound));
        assert_eq!(count_items(other_cart.id, &connection), 1);
    }

    #[test]
    fn remove_item_from_purchased_cart_fails() {
        let connection = seed_test_catalog();
        let cart = create_cart(&connection).unwrap();
        let item = add_item(cart.id, 1, 1, &connection).unwrap();
        purchase_cart(cart.id, &connection).unwrap();

        let result = remove_item(cart.id, item.id, &connection);

        assert_eq!(result, Err(Error::CartAlreadyPurchased));
        assert_eq!(count_items(cart.id, &connection), 1);
    }

    #[test]
    fn purchase_cart_sets_flag_and_timestamp() {
        let connection = seed_test_catalog();
        let cart = create_cart(&connection).unwrap();

        let purchased = purchase_cart(cart.id, &connection).expect("Could not purchase cart");

        assert!(purchased.is_purchased);
        assert!(purchased.purchased_at.is_some());

        let stored = get_cart(cart.id, &connection).unwrap();
        assert_eq!(stored, purchased);
    }

    #[test]
    fn purchase_missing_cart_returns_not_found() {
        let connection = seed_test_catalog();

        let result = purchase_cart(999, &connection);

        assert_eq!(result, Err(Error::NotFound));
    }

    #[test]
    fn re_purchase_is_rejected_and_keeps_original_timestamp() {
        let connection = seed_test_catalog();
        let cart = create_cart(&connection).unwrap();
        let purchased = purchase_cart(cart.id, &connection).unwrap();

        let result = purchase_cart(cart.id, &connection);

        assert_eq!(result, Err(Error::CartAlreadyPurchased));

        let stored = get_cart(cart.id, &connection).unwrap();
        assert_eq!(stored.purchased_at, purchased.purchased_at);
    }
}
