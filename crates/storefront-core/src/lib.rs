//! # storefront-core: Pure Domain Logic for the Storefront
//!
//! Everything in this crate is deterministic and free of I/O. The stateful
//! pieces (auth and cart stores, the composition root) live in the
//! application crate and build on the types defined here.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Storefront Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Consumers (header, product grid)               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │          apps/storefront: commands ──► stores (Arc<Mutex>)      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            ★ storefront-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  catalog  │  │ validation│  │   │
//! │  │   │ Identity  │  │   Money   │  │  Product  │  │   rules   │  │   │
//! │  │   │ Quantity  │  │           │  │  search   │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::catalog::{popular_products, search_products};
//! use storefront_core::money::Money;
//!
//! let products = popular_products();
//! let hits = search_products(&products, "montre");
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].price, Money::from_cents(12999));
//! ```

pub mod catalog;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::Product;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::{Identity, Quantity};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity accepted by a single add-to-cart action.
///
/// Only one action is bounded. Repeated adds of the same product merge into
/// one `u32` line quantity, which saturates at `u32::MAX` instead of
/// wrapping.
pub const MAX_ITEM_QUANTITY: u32 = 999;

/// Maximum length of a search query, in bytes after trimming.
pub const MAX_SEARCH_QUERY_LEN: usize = 100;
