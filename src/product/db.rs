//! Database operations for products, including the filtered catalog query.

use rusqlite::{Connection, Row, params_from_iter, types::Value};

use crate::{
    Error,
    category::CategoryId,
    product::{Product, ProductId, ProductQuery, ProductSortBy, ProductSummary},
};

/// Create a product and return it with its generated ID.
///
/// # Errors
/// This function will return a:
/// - [Error::NegativePrice] if `price` is less than zero,
/// - [Error::NotFound] if `category_id` does not refer to a valid category,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn create_product(
    name: &str,
    description: &str,
    price: f64,
    category_id: CategoryId,
    connection: &Connection,
) -> Result<Product, Error> {
    if price < 0.0 {
        return Err(Error::NegativePrice(price));
    }

    connection
        .execute(
            "INSERT INTO product (name, description, price, category_id) VALUES (?1, ?2, ?3, ?4);",
            (name, description, price, category_id),
        )
        .map_err(|error| match error {
            // Code 787 occurs when a FOREIGN KEY constraint failed.
            // The caller tried to add a product for a non-existent category.
            rusqlite::Error::SqliteFailure(error, Some(_)) if error.extended_code == 787 => {
                Error::NotFound
            }
            error => error.into(),
        })?;

    let id = connection.last_insert_rowid();

    Ok(Product {
        id,
        name: name.to_owned(),
        description: description.to_owned(),
        price,
        category_id,
    })
}

/// Retrieve a single product by ID.
pub fn get_product(product_id: ProductId, connection: &Connection) -> Result<Product, Error> {
    connection
        .prepare(
            "SELECT id, name, description, price, category_id FROM product WHERE id = :id;",
        )?
        .query_row(&[(":id", &product_id)], map_row)
        .map_err(|error| error.into())
}

/// Query the product catalog.
///
/// `filter.search` matches product names by substring, case-insensitively
/// for ASCII (SQL `LIKE` semantics). Results are ordered by the key named in
/// `filter.sort_by` with ties broken by insertion order. No matches is not
/// an error, the result is simply empty.
pub fn query_products(
    filter: &ProductQuery,
    connection: &Connection,
) -> Result<Vec<ProductSummary>, Error> {
    let mut query_string_parts = vec![
        "SELECT product.id, product.name, product.description, product.price, category.name
         FROM product INNER JOIN category ON category.id = product.category_id"
            .to_string(),
    ];
    let mut where_clause_parts = vec![];
    let mut query_parameters = vec![];

    if let Some(search) = filter.search.as_deref().filter(|search| !search.is_empty()) {
        where_clause_parts.push(format!(
            "product.name LIKE ?{} ESCAPE '\\'",
            query_parameters.len() + 1
        ));
        query_parameters.push(Value::Text(format!("%{}%", escape_like_pattern(search))));
    }

    if let Some(category_id) = filter.category_id {
        where_clause_parts.push(format!(
            "product.category_id = ?{}",
            query_parameters.len() + 1
        ));
        query_parameters.push(Value::Integer(category_id));
    }

    if !where_clause_parts.is_empty() {
        query_string_parts.push(String::from("WHERE ") + &where_clause_parts.join(" AND "));
    }

    match filter.sort_by {
        ProductSortBy::Name => {
            query_string_parts.push("ORDER BY product.name ASC, product.id ASC".to_string())
        }
        ProductSortBy::Price => {
            query_string_parts.push("ORDER BY product.price ASC, product.id ASC".to_string())
        }
    }

    let query_string = query_string_parts.join(" ");
    let params = params_from_iter(query_parameters.iter());

    connection
        .prepare(&query_string)?
        .query_map(params, |row| {
            Ok(ProductSummary {
                id: row.get(0)?,
                name: row.get(1)?,
                description: row.get(2)?,
                price: row.get(3)?,
                category: row.get(4)?,
            })
        })?
        .map(|maybe_product| maybe_product.map_err(Error::SqlError))
        .collect()
}

/// Initialize the product table and indexes.
pub fn create_product_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS product (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            description TEXT NOT NULL,
            price REAL NOT NULL,
            category_id INTEGER NOT NULL,
            FOREIGN KEY(category_id) REFERENCES category(id)
        );

        CREATE INDEX IF NOT EXISTS idx_product_category ON product(category_id);",
    )?;

    Ok(())
}

fn map_row(row: &Row) -> Result<Product, rusqlite::Error> {
    Ok(Product {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        price: row.get(3)?,
        category_id: row.get(4)?,
    })
}

// `%` and `_` are LIKE wildcards, so a search needle containing them must be
// escaped to stay a plain substring match.
fn escape_like_pattern(needle: &str) -> String {
    needle
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}
