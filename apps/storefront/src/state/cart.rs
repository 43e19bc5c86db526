//! # Cart State
//!
//! Manages the shopping cart.
//!
//! ## Snapshots
//! The cart lives behind `Mutex<Arc<Cart>>`. Readers get an `Arc<Cart>`
//! snapshot; writers go through `Arc::make_mut`, which clones the cart only
//! when a snapshot is still held somewhere. A snapshot never changes after
//! it has been handed out.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  Consumer Action          Command                 Cart State Change     │
//! │  ───────────────          ───────                 ─────────────────     │
//! │                                                                         │
//! │  Click Product ──────────► add_to_cart() ───────► line.qty += n         │
//! │                                                   or lines.push(line)   │
//! │                                                                         │
//! │  Click Remove ───────────► remove_from_cart() ──► lines.retain(..)      │
//! │                                                                         │
//! │  Click Clear ────────────► clear_cart() ────────► lines.clear()         │
//! │                                                                         │
//! │  Render Header ──────────► cart_count() ────────► (read only)           │
//! │                                                                         │
//! │  NOTE: Each write holds the lock for the whole find-then-update step.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use storefront_core::{Money, Product, Quantity};
use tracing::debug;

/// What a consumer hands to the cart: a product reference without quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: String,
    pub name: String,
    pub unit_price: Money,
}

impl CartItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, unit_price: Money) -> Self {
        CartItem {
            id: id.into(),
            name: name.into(),
            unit_price,
        }
    }
}

/// Freezes the product's name and price at the time of adding.
impl From<&Product> for CartItem {
    fn from(product: &Product) -> Self {
        CartItem::new(product.id.clone(), product.name.clone(), product.price)
    }
}

/// One entry in the cart, keyed by product id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub id: String,
    pub name: String,
    pub unit_price: Money,
    pub quantity: u32,
}

impl CartLine {
    fn new(item: CartItem, quantity: Quantity) -> Self {
        CartLine {
            id: item.id,
            name: item.name,
            unit_price: item.unit_price,
            quantity: quantity.get(),
        }
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by `id` (adding the same product increases quantity)
/// - Every line has quantity >= 1
/// - Existing lines keep their position; new lines are appended
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    lines: Vec<CartLine>,

    /// When the cart was created or last cleared.
    created_at: DateTime<Utc>,
}

impl Cart {
    pub fn new() -> Self {
        Cart {
            lines: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn items(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn get(&self, id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.id == id)
    }

    /// Number of distinct lines.
    pub fn item_count(&self) -> usize {
        self.lines.len()
    }

    /// Sum of quantities over every line. Never cached.
    pub fn total_quantity(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Sum of line totals, before any tax or shipping.
    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn add(&mut self, item: CartItem, quantity: Quantity) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.id == item.id) {
            // Capped at u32::MAX, see MAX_ITEM_QUANTITY.
            line.quantity = line.quantity.saturating_add(quantity.get());
            return;
        }

        self.lines.push(CartLine::new(item, quantity));
    }

    fn remove(&mut self, id: &str) -> bool {
        let initial_len = self.lines.len();
        self.lines.retain(|l| l.id != id);
        self.lines.len() != initial_len
    }

    fn clear(&mut self) {
        self.lines.clear();
        self.created_at = Utc::now();
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

/// Cart totals summary for command responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub item_count: usize,
    pub total_quantity: u64,
    pub subtotal: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            subtotal: cart.subtotal(),
        }
    }
}

/// In-memory cart store.
///
/// All operations are total: nothing here returns an error. Quantity is
/// already guaranteed positive by [`Quantity`]; the unit price is stored as
/// given.
#[derive(Debug, Default)]
pub struct CartStore {
    cart: Mutex<Arc<Cart>>,
}

impl CartStore {
    /// Creates an empty cart store.
    pub fn new() -> Self {
        CartStore::default()
    }

    fn lock(&self) -> MutexGuard<'_, Arc<Cart>> {
        self.cart.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Applies `f` to the cart under the lock and returns the resulting
    /// snapshot.
    fn update<F>(&self, f: F) -> Arc<Cart>
    where
        F: FnOnce(&mut Cart),
    {
        let mut cart = self.lock();
        f(Arc::make_mut(&mut *cart));
        Arc::clone(&*cart)
    }

    /// Returns the current cart. Later writes do not affect it.
    pub fn snapshot(&self) -> Arc<Cart> {
        Arc::clone(&*self.lock())
    }

    /// Adds `quantity` units of `item`.
    ///
    /// ## Behavior
    /// - If the id is already in the cart: its quantity increases
    /// - Otherwise: a new line is appended at the end
    pub fn add_item(&self, item: CartItem, quantity: Quantity) -> Arc<Cart> {
        debug!(id = %item.id, quantity = %quantity, "cart add_item");
        self.update(|cart| cart.add(item, quantity))
    }

    /// Removes the line with `id`. Absent ids are ignored.
    pub fn remove_item(&self, id: &str) -> Arc<Cart> {
        self.update(|cart| {
            let removed = cart.remove(id);
            debug!(id = %id, removed, "cart remove_item");
        })
    }

    /// Empties the cart.
    pub fn clear(&self) -> Arc<Cart> {
        debug!("cart clear");
        self.update(Cart::clear)
    }

    pub fn total_quantity(&self) -> u64 {
        self.lock().total_quantity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::catalog::popular_products;

    fn item(id: &str, price_cents: i64) -> CartItem {
        CartItem::new(id, format!("Product {}", id), Money::from_cents(price_cents))
    }

    fn qty(n: u32) -> Quantity {
        Quantity::new(n).unwrap()
    }

    fn quantities(cart: &Cart) -> Vec<(String, u32)> {
        cart.items()
            .iter()
            .map(|l| (l.id.clone(), l.quantity))
            .collect()
    }

    #[test]
    fn test_cart_add_item() {
        let store = CartStore::new();
        let cart = store.add_item(item("1", 999), qty(2));

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total_quantity(), 2);
        assert_eq!(cart.subtotal(), Money::from_cents(1998));
    }

    #[test]
    fn test_cart_add_same_item_increases_quantity() {
        let store = CartStore::new();
        store.add_item(item("1", 999), qty(2));
        let cart = store.add_item(item("1", 999), qty(3));

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total_quantity(), 5);
    }

    #[test]
    fn test_cart_new_item_appends_at_end() {
        let store = CartStore::new();
        store.add_item(item("b", 100), Quantity::ONE);
        store.add_item(item("a", 100), Quantity::ONE);
        let cart = store.add_item(item("b", 100), Quantity::ONE);

        assert_eq!(
            quantities(&cart),
            vec![("b".to_string(), 2), ("a".to_string(), 1)]
        );
    }

    #[test]
    fn test_cart_remove_absent_id_is_noop() {
        let store = CartStore::new();
        let before = store.add_item(item("1", 500), qty(2));
        let after = store.remove_item("missing");

        assert_eq!(*before, *after);
    }

    #[test]
    fn test_cart_clear() {
        let store = CartStore::new();
        store.add_item(item("1", 999), qty(2));
        assert!(!store.snapshot().is_empty());

        let cart = store.clear();
        assert!(cart.is_empty());
        assert_eq!(store.total_quantity(), 0);
    }

    #[test]
    fn test_scenario_add_remove_clear() {
        let store = CartStore::new();

        let cart = store.add_item(CartItem::new("1", "A", Money::from_cents(1000)), qty(2));
        assert_eq!(quantities(&cart), vec![("1".to_string(), 2)]);
        assert_eq!(cart.total_quantity(), 2);

        let cart = store.add_item(CartItem::new("1", "A", Money::from_cents(1000)), qty(3));
        assert_eq!(quantities(&cart), vec![("1".to_string(), 5)]);
        assert_eq!(cart.total_quantity(), 5);

        let cart = store.add_item(CartItem::new("2", "B", Money::from_cents(250)), Quantity::default());
        assert_eq!(
            quantities(&cart),
            vec![("1".to_string(), 5), ("2".to_string(), 1)]
        );
        assert_eq!(cart.total_quantity(), 6);

        let cart = store.remove_item("1");
        assert_eq!(quantities(&cart), vec![("2".to_string(), 1)]);
        assert_eq!(cart.total_quantity(), 1);

        let cart = store.clear();
        assert!(quantities(&cart).is_empty());
        assert_eq!(cart.total_quantity(), 0);
    }

    #[test]
    fn test_total_quantity_matches_lines_after_mixed_operations() {
        let store = CartStore::new();
        let ids = ["1", "2", "3", "2", "1", "4"];

        for (step, id) in ids.iter().enumerate() {
            store.add_item(item(id, 100), qty(step as u32 + 1));
            if step == 3 {
                store.remove_item("3");
            }

            let cart = store.snapshot();
            let expected: u64 = cart.items().iter().map(|l| u64::from(l.quantity)).sum();
            assert_eq!(cart.total_quantity(), expected);
            assert_eq!(store.total_quantity(), expected);
        }
    }

    #[test]
    fn test_snapshot_is_not_affected_by_later_writes() {
        let store = CartStore::new();
        store.add_item(item("1", 100), qty(1));
        let old = store.snapshot();

        store.add_item(item("1", 100), qty(4));
        store.add_item(item("2", 100), qty(1));

        assert_eq!(quantities(&old), vec![("1".to_string(), 1)]);
        assert_eq!(store.total_quantity(), 6);
    }

    #[test]
    fn test_negative_price_is_stored_as_given() {
        let store = CartStore::new();
        let cart = store.add_item(item("refund", -500), qty(2));
        assert_eq!(cart.subtotal(), Money::from_cents(-1000));
    }

    #[test]
    fn test_subtotal_saturates_on_huge_prices() {
        let store = CartStore::new();
        store.add_item(item("1", i64::MAX / 2), qty(3));
        let cart = store.add_item(item("2", i64::MAX / 2), qty(1));

        assert_eq!(cart.subtotal(), Money::from_cents(i64::MAX));
        assert_eq!(CartTotals::from(&*cart).subtotal, Money::from_cents(i64::MAX));
    }

    #[test]
    fn test_merged_quantity_caps_at_u32_max() {
        let mut cart = Cart::new();
        cart.add(item("1", 100), Quantity::ONE);
        cart.lines[0].quantity = u32::MAX - 1;

        cart.add(item("1", 100), qty(5));

        assert_eq!(cart.items()[0].quantity, u32::MAX);
        assert_eq!(cart.total_quantity(), u64::from(u32::MAX));
    }

    #[test]
    fn test_cart_item_from_product_freezes_price() {
        let products = popular_products();
        let frozen = CartItem::from(&products[0]);

        assert_eq!(frozen.id, "1");
        assert_eq!(frozen.unit_price, Money::from_cents(4999));
    }

    #[test]
    fn test_cart_totals() {
        let store = CartStore::new();
        store.add_item(item("1", 4999), qty(2));
        let cart = store.add_item(item("2", 8999), qty(1));

        let totals = CartTotals::from(&*cart);
        assert_eq!(totals.item_count, 2);
        assert_eq!(totals.total_quantity, 3);
        assert_eq!(totals.subtotal, Money::from_cents(18997));
    }

    #[test]
    fn test_clear_resets_created_at() {
        let store = CartStore::new();
        let created = store.snapshot().created_at();
        let cleared = store.clear();
        assert!(cleared.created_at() >= created);
    }
}
