//! # Cart Commands
//!
//! Entry points for the product grid ("add to cart"), the cart page and the
//! header's cart-count indicator.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐   add_to_cart    ┌──────────┐                             │
//! │  │  Empty   │─────────────────►│ In Cart  │◄──┐ add_to_cart            │
//! │  │  Cart    │                  │          │───┘ remove_from_cart       │
//! │  └──────────┘◄─────────────────└──────────┘                             │
//! │                  clear_cart                                             │
//! │                                                                         │
//! │  Unmounted composition: every command returns OUT_OF_SCOPE              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use storefront_core::catalog::find_product;
use storefront_core::validation::validate_price_cents;
use storefront_core::{Product, Quantity};
use tracing::debug;

use crate::error::ApiError;
use crate::state::{Cart, CartItem, CartLine, CartTotals, StoreScope};

/// Cart response including items and totals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartLine>,
    pub totals: CartTotals,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            items: cart.items().to_vec(),
            totals: CartTotals::from(cart),
        }
    }
}

/// Gets the current cart contents.
pub fn get_cart(scope: &StoreScope) -> Result<CartResponse, ApiError> {
    debug!("get_cart command");
    let cart = scope.cart()?;
    Ok(CartResponse::from(&*cart.snapshot()))
}

/// Adds a catalog product to the cart.
///
/// ## Behavior
/// - If product already in cart: quantity increases
/// - If product not in cart: appended as new line
/// - Name and price are frozen at the time of adding
///
/// ## Arguments
/// * `products` - Catalog the id is looked up in
/// * `product_id` - Product to add
/// * `quantity` - Quantity to add (default: 1, range 1..=999)
pub fn add_to_cart(
    scope: &StoreScope,
    products: &[Product],
    product_id: &str,
    quantity: Option<u32>,
) -> Result<CartResponse, ApiError> {
    let quantity = quantity.unwrap_or(1);
    debug!(product_id = %product_id, quantity = %quantity, "add_to_cart command");

    let cart = scope.cart()?;
    let product = find_product(products, product_id)?;
    validate_price_cents(product.price.cents())?;
    let quantity = Quantity::new(quantity)?;

    let snapshot = cart.add_item(CartItem::from(product), quantity);
    Ok(CartResponse::from(&*snapshot))
}

/// Removes a line from the cart. Unknown ids are not an error.
pub fn remove_from_cart(scope: &StoreScope, product_id: &str) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, "remove_from_cart command");
    let cart = scope.cart()?;
    Ok(CartResponse::from(&*cart.remove_item(product_id)))
}

/// Clears all items from the cart.
pub fn clear_cart(scope: &StoreScope) -> Result<CartResponse, ApiError> {
    debug!("clear_cart command");
    let cart = scope.cart()?;
    Ok(CartResponse::from(&*cart.clear()))
}

/// Total number of units in the cart, as shown on the header badge.
pub fn cart_count(scope: &StoreScope) -> Result<u64, ApiError> {
    let cart = scope.cart()?;
    Ok(cart.total_quantity())
}
