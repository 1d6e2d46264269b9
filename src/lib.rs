//! SmartCart is a demo backend for a small online grocery store.
//!
//! This library provides a JSON REST API over a SQLite database of product
//! categories, products, and shopping carts. A cart can be filled, emptied
//! and finally purchased, after which it becomes part of the purchase
//! history. The purchase history drives the aggregate queries: overall
//! statistics, a recommended cart, and the products frequently bought
//! together with a given product.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod app_state;
mod cart;
mod category;
mod db;
mod endpoints;
mod error;
mod logging;
mod product;
mod purchase;
mod routing;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use category::{Category, create_category};
pub use db::initialize as initialize_db;
pub use error::Error;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use product::{Product, create_product};
pub use routing::build_router;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
