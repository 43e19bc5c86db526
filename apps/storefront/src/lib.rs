//! # Storefront Library
//!
//! Stores, composition root and consumer commands for the storefront demo.
//!
//! ## Module Organization
//! ```text
//! storefront_lib/
//! ├── lib.rs            ◄─── You are here (startup & demo session)
//! ├── state/
//! │   ├── mod.rs        ◄─── State type exports
//! │   ├── auth.rs       ◄─── AuthStore
//! │   ├── cart.rs       ◄─── CartStore, Cart snapshots
//! │   ├── composition.rs◄─── StoreComposition, StoreScope
//! │   └── config.rs     ◄─── ConfigState
//! ├── commands/
//! │   ├── mod.rs        ◄─── Command exports
//! │   ├── auth.rs       ◄─── Sign-in / sign-out
//! │   ├── cart.rs       ◄─── Cart manipulation, header count
//! │   └── catalog.rs    ◄─── Home products, search
//! └── error.rs          ◄─── ScopeError, ApiError
//! ```

pub mod commands;
pub mod error;
pub mod state;

use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use commands::cart::CartResponse;
use error::ApiError;
use state::{ConfigState, StoreComposition, StoreScope};

/// What the scripted session ended with.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub search_hits: usize,
    pub cart: CartResponse,
    pub signed_in: bool,
}

/// Runs the storefront demo.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │     • Default: INFO, storefront crates at DEBUG, RUST_LOG overrides     │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • ConfigState::from_env()                                           │
/// │                                                                         │
/// │  3. Mount Composition ────────────────────────────────────────────────► │
/// │     • One AuthStore, one CartStore                                      │
/// │                                                                         │
/// │  4. Drive Consumers ──────────────────────────────────────────────────► │
/// │     • load home, search, sign in, add to cart, sign out                 │
/// │                                                                         │
/// │  5. Unmount ──────────────────────────────────────────────────────────► │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> Result<SessionSummary, ApiError> {
    init_tracing();

    info!("Starting storefront demo");

    let config = ConfigState::from_env();
    info!(store = %config.store_name, currency = %config.currency_code, "Configuration loaded");

    let composition = StoreComposition::new();
    let scope = composition.mount();

    let summary = demo_session(&scope, &config).await;

    composition.unmount();
    summary
}

/// One scripted visit, driven through the command layer only.
pub async fn demo_session(scope: &StoreScope, config: &ConfigState) -> Result<SessionSummary, ApiError> {
    let products = commands::catalog::load_home(config).await;

    let results = commands::catalog::search(&products, "bluetooth")?;
    info!(query = %results.query, hits = results.total, "header search");

    commands::auth::sign_in(scope, "Demo Shopper", "shopper@example.com")?;

    for product in &results.products {
        commands::cart::add_to_cart(scope, &products, &product.id, None)?;
    }
    let cart = commands::cart::add_to_cart(scope, &products, "2", Some(2))?;
    let count = commands::cart::cart_count(scope)?;

    info!(
        items = cart.totals.item_count,
        count,
        subtotal = %config.format_currency(cart.totals.subtotal.cents()),
        "cart updated"
    );

    let session = commands::auth::sign_out(scope)?;

    Ok(SessionSummary {
        search_hits: results.total,
        cart: commands::cart::get_cart(scope)?,
        signed_in: session.signed_in,
    })
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=storefront_lib=trace` - Show trace for this crate only
/// - Default: INFO, DEBUG for the storefront crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,storefront=debug,storefront_lib=debug"));

    // A subscriber may already be installed by an embedding process.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::Money;

    fn instant_config() -> ConfigState {
        ConfigState {
            catalog_delay_ms: 0,
            ..ConfigState::default()
        }
    }

    #[tokio::test]
    async fn test_demo_session() {
        let composition = StoreComposition::new();
        let scope = composition.mount();

        let summary = demo_session(&scope, &instant_config()).await.unwrap();

        assert_eq!(summary.search_hits, 2);
        assert!(!summary.signed_in);
        assert_eq!(summary.cart.totals.item_count, 3);
        assert_eq!(summary.cart.totals.total_quantity, 4);
        assert_eq!(
            summary.cart.totals.subtotal,
            Money::from_cents(4999 + 8999 + 2 * 12999)
        );
    }

    #[tokio::test]
    async fn test_demo_session_requires_mounted_scope() {
        let err = demo_session(&StoreScope::detached(), &instant_config())
            .await
            .unwrap_err();
        assert_eq!(err.code, error::ErrorCode::OutOfScope);
    }
}
