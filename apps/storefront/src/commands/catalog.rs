//! # Catalog Commands
//!
//! Home page product list and the header search.
//!
//! ## Search Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Header Search Flow                                   │
//! │                                                                         │
//! │  Shopper submits "bluetooth"                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_search_query() ── > 100 chars? ──► VALIDATION_ERROR           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  search_products(): case-insensitive match on name or description       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SearchResponse { query, products, total } in catalog order             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::{Duration, Instant};

use serde::Serialize;
use storefront_core::catalog::{popular_products, search_products};
use storefront_core::validation::validate_search_query;
use storefront_core::Product;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::ConfigState;

/// Search results for the header search box.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub query: String,
    pub products: Vec<Product>,
    pub total: usize,
}

/// Simulates fetching the popular products from a backend.
///
/// Waits `delay`, then resolves with the full list. Never fails, is never
/// retried and has no cancellation of its own; dropping the future is the
/// only way to abandon it.
pub async fn fetch_popular_products(delay: Duration) -> Vec<Product> {
    debug!(delay_ms = delay.as_millis() as u64, "fetching popular products");
    tokio::time::sleep(delay).await;
    popular_products()
}

/// Loads the products for the home page grid using the configured delay.
pub async fn load_home(config: &ConfigState) -> Vec<Product> {
    let products = fetch_popular_products(config.catalog_delay()).await;
    info!(count = products.len(), store = %config.store_name, "home page products loaded");
    products
}

/// Runs the header search over `products`.
///
/// ## Arguments
/// * `query` - Search term, trimmed; empty matches everything
pub fn search(products: &[Product], query: &str) -> Result<SearchResponse, ApiError> {
    let start = Instant::now();
    let query = validate_search_query(query)?;

    let hits: Vec<Product> = search_products(products, &query)
        .into_iter()
        .cloned()
        .collect();

    debug!(
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        count = hits.len(),
        query = %query,
        "search complete"
    );

    Ok(SearchResponse {
        total: hits.len(),
        products: hits,
        query,
    })
}
