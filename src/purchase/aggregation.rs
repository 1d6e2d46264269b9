//! Frequency aggregations over purchased carts.
//!
//! Every function here is a pure function over the purchased-cart snapshot
//! and is recomputed in full on each call. The history of this demo store
//! stays small enough that a linear pass per request beats maintaining
//! incremental counters.

use std::collections::HashMap;

use crate::{
    product::ProductId,
    purchase::{
        CoPurchasedProduct, PopularProduct, PurchaseRecord, PurchaseStatistics, PurchasedCart,
        PurchasedLine, Recommendation,
    },
};

/// How many products the popularity ranking reports.
const MOST_POPULAR_LIMIT: usize = 5;

/// How many products the recommended cart holds.
const RECOMMENDATION_LIMIT: usize = 5;

/// How many co-purchased products are reported per product.
const BOUGHT_TOGETHER_LIMIT: usize = 3;

/// Compute summary statistics over all purchased carts.
///
/// The popularity ranking sums quantities per product name and reports the
/// top five, ordered by quantity descending with ties broken by name
/// ascending. With no purchases, every value is zero and the ranking is
/// empty; this is not an error.
pub fn purchase_statistics(purchases: &[PurchasedCart]) -> PurchaseStatistics {
    let total_purchases = purchases.len() as i64;

    if total_purchases == 0 {
        return PurchaseStatistics {
            total_purchases: 0,
            total_spent: 0.0,
            average_per_purchase: 0.0,
            most_popular_products: Vec::new(),
        };
    }

    let mut total_spent = 0.0;
    let mut quantity_by_name: HashMap<&str, i64> = HashMap::new();

    for cart in purchases {
        for item in &cart.items {
            total_spent += item.price * item.quantity as f64;
            *quantity_by_name
                .entry(item.product_name.as_str())
                .or_insert(0) += item.quantity;
        }
    }

    let mut ranked: Vec<(&str, i64)> = quantity_by_name.into_iter().collect();
    ranked.sort_by(|(left_name, left_quantity), (right_name, right_quantity)| {
        right_quantity
            .cmp(left_quantity)
            .then_with(|| left_name.cmp(right_name))
    });

    let most_popular_products = ranked
        .into_iter()
        .take(MOST_POPULAR_LIMIT)
        .map(|(name, count)| PopularProduct {
            name: name.to_owned(),
            count,
        })
        .collect();

    PurchaseStatistics {
        total_purchases,
        total_spent,
        average_per_purchase: total_spent / total_purchases as f64,
        most_popular_products,
    }
}

/// Build the recommended cart from purchase history.
///
/// The same frequency computation as [purchase_statistics], but keyed by
/// product ID, with ties broken by ID ascending. Each recommended product
/// carries a suggested quantity of one regardless of how much of it was
/// bought historically.
pub fn recommend_cart(purchases: &[PurchasedCart]) -> Vec<Recommendation> {
    let mut quantity_by_product: HashMap<ProductId, i64> = HashMap::new();
    let mut product_info: HashMap<ProductId, (&str, f64)> = HashMap::new();

    for cart in purchases {
        for item in &cart.items {
            *quantity_by_product.entry(item.product_id).or_insert(0) += item.quantity;
            product_info
                .entry(item.product_id)
                .or_insert((item.product_name.as_str(), item.price));
        }
    }

    let mut ranked: Vec<(ProductId, i64)> = quantity_by_product.into_iter().collect();
    ranked.sort_by(|(left_id, left_quantity), (right_id, right_quantity)| {
        right_quantity
            .cmp(left_quantity)
            .then_with(|| left_id.cmp(right_id))
    });

    ranked
        .into_iter()
        .take(RECOMMENDATION_LIMIT)
        .map(|(product_id, _)| {
            let (name, price) = product_info[&product_id];

            Recommendation {
                product_id,
                name: name.to_owned(),
                price,
                suggested_quantity: 1,
            }
        })
        .collect()
}

/// Find the products most often bought together with `product_id`.
///
/// Considers only purchased carts containing `product_id` and counts, for
/// every other product, the number of such carts it appears in. Unlike the
/// quantity-weighted rankings above, this is a cart count: a cart holding
/// five units of a companion product contributes one, not five. Reports the
/// top three by cart count descending, ties broken by product ID ascending.
pub fn frequently_bought_together(
    product_id: ProductId,
    purchases: &[PurchasedCart],
) -> Vec<CoPurchasedProduct> {
    let mut carts_by_product: HashMap<ProductId, i64> = HashMap::new();
    let mut product_info: HashMap<ProductId, (&str, f64)> = HashMap::new();

    for cart in purchases {
        if !cart.items.iter().any(|item| item.product_id == product_id) {
            continue;
        }

        for item in &cart.items {
            if item.product_id == product_id {
                continue;
            }

            // A cart holds at most one line item per product, so counting
            // line items counts carts.
            *carts_by_product.entry(item.product_id).or_insert(0) += 1;
            product_info
                .entry(item.product_id)
                .or_insert((item.product_name.as_str(), item.price));
        }
    }

    let mut ranked: Vec<(ProductId, i64)> = carts_by_product.into_iter().collect();
    ranked.sort_by(|(left_id, left_count), (right_id, right_count)| {
        right_count
            .cmp(left_count)
            .then_with(|| left_id.cmp(right_id))
    });

    ranked
        .into_iter()
        .take(BOUGHT_TOGETHER_LIMIT)
        .map(|(companion_id, frequency)| {
            let (name, price) = product_info[&companion_id];

            CoPurchasedProduct {
                product_id: companion_id,
                name: name.to_owned(),
                price,
                frequency,
            }
        })
        .collect()
}

/// Present the purchased-cart snapshot as the purchase history, computing
/// line totals and cart totals at read time.
pub fn purchase_history(purchases: &[PurchasedCart]) -> Vec<PurchaseRecord> {
    purchases
        .iter()
        .map(|cart| {
            let items: Vec<PurchasedLine> = cart
                .items
                .iter()
                .map(|item| PurchasedLine {
                    product_name: item.product_name.clone(),
                    price: item.price,
                    quantity: item.quantity,
                    total: item.price * item.quantity as f64,
                })
                .collect();

            let total = items.iter().map(|line| line.total).sum();

            PurchaseRecord {
                id: cart.cart_id,
                purchased_at: cart.purchased_at,
                items,
                total,
            }
        })
        .collect()
}
