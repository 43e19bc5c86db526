//! # Domain Types
//!
//! Core domain types shared by the stores and their consumers.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Identity     │   │    Quantity     │   │    Product      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  (catalog.rs)   │       │
//! │  │  name           │   │  u32, >= 1      │   │  id, name       │       │
//! │  │  email          │   │  default 1      │   │  price (Money)  │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::MAX_ITEM_QUANTITY;

// =============================================================================
// Identity
// =============================================================================

/// The signed-in shopper.
///
/// No format checks are applied to `email`; the auth store keeps whatever it
/// is handed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Identity {
    pub name: String,
    pub email: String,
}

impl Identity {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Identity {
            name: name.into(),
            email: email.into(),
        }
    }
}

// =============================================================================
// Quantity
// =============================================================================

/// Number of units added to the cart in one action.
///
/// Always at least one; a zero or oversized quantity cannot be constructed,
/// so the cart never holds an entry with a non-positive quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(try_from = "u32", into = "u32")]
#[ts(export)]
pub struct Quantity(u32);

impl Quantity {
    /// A single unit, the default for "add to cart".
    pub const ONE: Quantity = Quantity(1);

    /// Creates a quantity, rejecting zero and values above
    /// [`MAX_ITEM_QUANTITY`].
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::Quantity;
    ///
    /// assert_eq!(Quantity::new(3).unwrap().get(), 3);
    /// assert!(Quantity::new(0).is_err());
    /// ```
    pub fn new(value: u32) -> Result<Self, ValidationError> {
        if value == 0 {
            return Err(ValidationError::MustBePositive {
                field: "quantity".to_string(),
            });
        }

        if value > MAX_ITEM_QUANTITY {
            return Err(ValidationError::OutOfRange {
                field: "quantity".to_string(),
                min: 1,
                max: i64::from(MAX_ITEM_QUANTITY),
            });
        }

        Ok(Quantity(value))
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Quantity::ONE
    }
}

impl TryFrom<u32> for Quantity {
    type Error = ValidationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Quantity::new(value)
    }
}

impl From<Quantity> for u32 {
    fn from(quantity: Quantity) -> Self {
        quantity.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
