//! Loads the snapshot of purchased carts that the aggregations consume.

use rusqlite::Connection;
use time::OffsetDateTime;

use crate::{
    Error,
    cart::CartId,
    purchase::{PurchasedCart, PurchasedItem},
};

/// Materialize every purchased cart with its line items, most recently
/// purchased first.
///
/// Carts that were never purchased are excluded entirely; purchased carts
/// with no items are still included (with an empty item list) so that they
/// count towards the purchase total. The whole snapshot is read in a single
/// query, so one call sees one consistent state of the history.
pub fn get_purchased_carts(connection: &Connection) -> Result<Vec<PurchasedCart>, Error> {
    let mut statement = connection.prepare(
        "SELECT cart.id, cart.purchased_at,
                cart_item.product_id, product.name, product.price, cart_item.quantity
         FROM cart
         LEFT JOIN cart_item ON cart_item.cart_id = cart.id
         LEFT JOIN product ON product.id = cart_item.product_id
         WHERE cart.is_purchased = 1
         ORDER BY cart.purchased_at DESC, cart.id DESC, cart_item.id ASC;",
    )?;

    let rows = statement.query_map([], |row| {
        let cart_id: CartId = row.get(0)?;
        let purchased_at: OffsetDateTime = row.get(1)?;

        // The item columns are NULL for purchased carts without any items.
        let item = match row.get::<_, Option<i64>>(2)? {
            Some(product_id) => Some(PurchasedItem {
                product_id,
                product_name: row.get(3)?,
                price: row.get(4)?,
                quantity: row.get(5)?,
            }),
            None => None,
        };

        Ok((cart_id, purchased_at, item))
    })?;

    let mut carts: Vec<PurchasedCart> = Vec::new();

    for maybe_row in rows {
        let (cart_id, purchased_at, item) = maybe_row?;

        match carts.last_mut() {
            Some(cart) if cart.cart_id == cart_id => {
                if let Some(item) = item {
                    cart.items.push(item);
                }
            }
            _ => carts.push(PurchasedCart {
                cart_id,
                purchased_at,
                items: item.into_iter().collect(),
            }),
        }
    }

    Ok(carts)
}
