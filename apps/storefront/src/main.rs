//! # Storefront Demo Entry Point
//!
//! Mounts the store composition, drives one scripted visit through the
//! command layer and exits.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Load configuration from the environment
//! 3. Mount the composition (AuthStore, CartStore)
//! 4. Run the demo session
//! 5. Unmount

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    match storefront_lib::run().await {
        Ok(summary) => {
            tracing::info!(
                items = summary.cart.totals.item_count,
                quantity = summary.cart.totals.total_quantity,
                "demo session finished"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "demo session failed");
            ExitCode::FAILURE
        }
    }
}
