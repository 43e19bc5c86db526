//! # State Module
//!
//! In-memory state for the storefront.
//!
//! ## Why Separate Stores?
//! Auth and cart never interact: signing out does not clear the cart, and no
//! operation spans both. Each store has its own lock, and the composition
//! only decides *which* instances are live.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    StoreComposition                             │   │
//! │  │  mount() ──► StoreScope (cloned into every consumer)            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │          ┌───────────────────┴──────────────┐                           │
//! │          ▼                                  ▼                           │
//! │  ┌──────────────────┐              ┌──────────────────┐                 │
//! │  │   AuthStore      │              │   CartStore      │                 │
//! │  │  Mutex<Option<   │              │  Mutex<Arc<      │                 │
//! │  │    Session>>     │              │    Cart>>        │                 │
//! │  └──────────────────┘              └──────────────────┘                 │
//! │                                                                         │
//! │  ConfigState: read-only, passed to commands that need it               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod auth;
mod cart;
mod composition;
mod config;

pub use auth::{AuthStore, Session};
pub use cart::{Cart, CartItem, CartLine, CartStore, CartTotals};
pub use composition::{StoreComposition, StoreScope};
pub use config::ConfigState;
