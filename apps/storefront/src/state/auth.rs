//! # Auth State
//!
//! Holds the signed-in shopper, if any.
//!
//! ## Auth Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Auth State Operations                                │
//! │                                                                         │
//! │  Consumer Action          Command                 State Change          │
//! │  ───────────────          ───────                 ────────────          │
//! │                                                                         │
//! │  Submit sign-in ─────────► sign_in() ───────────► session = Some(..)    │
//! │                                                   (previous discarded)  │
//! │                                                                         │
//! │  Click sign-out ─────────► sign_out() ──────────► session = None        │
//! │                                                   (idempotent)          │
//! │                                                                         │
//! │  Render header ──────────► current_user() ──────► (read only)           │
//! │                                                                         │
//! │  NOTE: Signing out never touches the cart.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use serde::Serialize;
use storefront_core::Identity;
use tracing::debug;

/// The current sign-in, with the moment it happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub identity: Identity,
    pub signed_in_at: DateTime<Utc>,
}

/// In-memory authentication store.
///
/// Holds at most one [`Session`]. Every operation takes the lock once, so a
/// reader never observes a half-replaced identity.
#[derive(Debug, Default)]
pub struct AuthStore {
    session: Mutex<Option<Session>>,
}

impl AuthStore {
    /// Creates a signed-out store.
    pub fn new() -> Self {
        AuthStore::default()
    }

    fn lock(&self) -> MutexGuard<'_, Option<Session>> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Signs `identity` in, replacing whoever was signed in before.
    ///
    /// No validation happens here; the email is stored as given.
    pub fn sign_in(&self, identity: Identity) {
        let mut session = self.lock();
        let previous = session.replace(Session {
            identity,
            signed_in_at: Utc::now(),
        });

        debug!(replaced = previous.is_some(), "identity signed in");
    }

    /// Signs out. Safe to call when nobody is signed in.
    pub fn sign_out(&self) {
        let previous = self.lock().take();
        debug!(was_signed_in = previous.is_some(), "identity signed out");
    }

    pub fn current_identity(&self) -> Option<Identity> {
        self.lock().as_ref().map(|s| s.identity.clone())
    }

    pub fn session(&self) -> Option<Session> {
        self.lock().clone()
    }

    pub fn is_signed_in(&self) -> bool {
        self.lock().is_some()
    }
}
