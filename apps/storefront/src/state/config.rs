//! # Configuration State
//!
//! Storefront settings loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`STOREFRONT_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Largest number of decimals whose divisor still fits in an `i64`.
const MAX_CURRENCY_DECIMALS: u8 = 18;

/// Storefront configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name shown in the header
    pub store_name: String,

    /// Currency code (ISO 4217)
    pub currency_code: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency (formatting clamps it to 18)
    pub currency_decimals: u8,

    /// Simulated latency of the product fetch, in milliseconds
    pub catalog_delay_ms: u64,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Store: "Storefront Demo"
    /// - Currency: EUR (€), 2 decimals
    /// - Catalog delay: 200 ms
    fn default() -> Self {
        ConfigState {
            store_name: "Storefront Demo".to_string(),
            currency_code: "EUR".to_string(),
            currency_symbol: "€".to_string(),
            currency_decimals: 2,
            catalog_delay_ms: 200,
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `STOREFRONT_NAME`: Override store name
    /// - `STOREFRONT_CURRENCY_SYMBOL`: Override currency symbol
    /// - `STOREFRONT_CATALOG_DELAY_MS`: Override catalog latency (e.g., "0")
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(name) = lookup("STOREFRONT_NAME") {
            config.store_name = name;
        }

        if let Some(symbol) = lookup("STOREFRONT_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(delay) = lookup("STOREFRONT_CATALOG_DELAY_MS") {
            match delay.trim().parse::<u64>() {
                Ok(ms) => config.catalog_delay_ms = ms,
                Err(e) => warn!(value = %delay, error = %e, "ignoring invalid STOREFRONT_CATALOG_DELAY_MS"),
            }
        }

        config
    }

    pub fn catalog_delay(&self) -> Duration {
        Duration::from_millis(self.catalog_delay_ms)
    }

    /// Formats a cent amount as a currency string.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_lib::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(4999), "€49.99");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        let decimals = self.currency_decimals.min(MAX_CURRENCY_DECIMALS);
        let divisor = 10_i64.pow(u32::from(decimals));
        let whole = (cents / divisor).unsigned_abs();
        let frac = (cents % divisor).unsigned_abs();

        format!(
            "{}{}{}",
            if cents < 0 { "-" } else { "" },
            self.currency_symbol,
            if decimals > 0 {
                format!("{}.{:0width$}", whole, frac, width = usize::from(decimals))
            } else {
                whole.to_string()
            }
        )
    }
}
