//! # Auth Commands
//!
//! Sign-in form and account menu entry points.

use serde::Serialize;
use storefront_core::validation::validate_required;
use storefront_core::Identity;
use tracing::debug;

use crate::error::ApiError;
use crate::state::{AuthStore, Session, StoreScope};

/// Auth response: who is signed in, if anyone.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub signed_in: bool,
    pub session: Option<Session>,
}

impl From<&AuthStore> for SessionResponse {
    fn from(auth: &AuthStore) -> Self {
        let session = auth.session();
        SessionResponse {
            signed_in: session.is_some(),
            session,
        }
    }
}

/// Signs a shopper in, replacing any current sign-in.
///
/// ## Validation
/// Only presence: `name` and `email` must not be blank. The email format is
/// not checked.
pub fn sign_in(scope: &StoreScope, name: &str, email: &str) -> Result<SessionResponse, ApiError> {
    debug!(name = %name, "sign_in command");

    let auth = scope.auth()?;
    let identity = Identity::new(
        validate_required("name", name)?,
        validate_required("email", email)?,
    );

    auth.sign_in(identity);
    Ok(SessionResponse::from(&*auth))
}

/// Signs out. The cart is left untouched.
pub fn sign_out(scope: &StoreScope) -> Result<SessionResponse, ApiError> {
    debug!("sign_out command");

    let auth = scope.auth()?;
    auth.sign_out();
    Ok(SessionResponse::from(&*auth))
}

pub fn current_user(scope: &StoreScope) -> Result<SessionResponse, ApiError> {
    let auth = scope.auth()?;
    Ok(SessionResponse::from(&*auth))
}
