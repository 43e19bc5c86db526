//! # Commands Module
//!
//! Consumer entry points: what the header, the product grid and the
//! sign-in form call.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── auth.rs     ◄─── Sign-in, sign-out, current user
//! ├── cart.rs     ◄─── Cart manipulation and header count
//! └── catalog.rs  ◄─── Home page products, header search
//! ```
//!
//! ## Scope Injection
//! Commands receive the [`StoreScope`](crate::state::StoreScope) explicitly
//! and resolve the store they need on every call. There is no global store.
//! ```rust,ignore
//! // Only needs auth
//! fn sign_in(scope: &StoreScope, name: &str, email: &str)
//!
//! // Only needs cart
//! fn cart_count(scope: &StoreScope)
//!
//! // Needs the catalog and the cart
//! fn add_to_cart(scope: &StoreScope, products: &[Product], product_id: &str, quantity: Option<u32>)
//! ```
//!
//! Every command returns `Result<_, ApiError>`; calling one with a scope
//! whose composition is not mounted yields `ErrorCode::OutOfScope` and
//! changes nothing.

pub mod auth;
pub mod cart;
pub mod catalog;
