//! # Error Types
//!
//! [`ScopeError`] for store access outside a mounted composition, and the
//! unified [`ApiError`] returned by every command.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Storefront                         │
//! │                                                                         │
//! │  Consumer                    Command Function                           │
//! │  ────────                    ────────────────                           │
//! │                                                                         │
//! │  add_to_cart(scope, ..)                                                 │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │  Not mounted? ─── ScopeError::NotMounted ─────────┐             │  │
//! │  │         │                                         │             │  │
//! │  │  Unknown product? ─── CoreError::ProductNotFound ─┤             │  │
//! │  │         │                                         ▼             │  │
//! │  │  Bad input? ─── ValidationError ─────────────── ApiError ──────►│  │
//! │  │         │                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use serde::Serialize;
use storefront_core::{CoreError, ValidationError};
use thiserror::Error;

// =============================================================================
// Scope Error
// =============================================================================

/// Which store a consumer tried to reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StoreKind {
    Auth,
    Cart,
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreKind::Auth => f.write_str("AuthStore"),
            StoreKind::Cart => f.write_str("CartStore"),
        }
    }
}

/// A store was accessed outside its composition scope.
///
/// Never defaulted away: callers see this instead of a fresh, empty store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScopeError {
    /// The handle was never bound to a mounted composition.
    #[error("{store} must be used within a mounted StoreComposition")]
    NotMounted { store: StoreKind },

    /// The composition this handle belonged to has been unmounted.
    #[error("{store} must be used within a mounted StoreComposition (composition was unmounted)")]
    Unmounted { store: StoreKind },
}

impl ScopeError {
    pub fn store(&self) -> StoreKind {
        match self {
            ScopeError::NotMounted { store } | ScopeError::Unmounted { store } => *store,
        }
    }
}

// =============================================================================
// API Error
// =============================================================================

/// Error returned from commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Product not found: 42"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Store used outside its composition scope
    OutOfScope,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", &id),
            CoreError::Validation(e) => ApiError::from(e),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl From<ScopeError> for ApiError {
    fn from(err: ScopeError) -> Self {
        tracing::warn!(store = %err.store(), "store accessed outside composition scope");
        ApiError::new(ErrorCode::OutOfScope, err.to_string())
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
