//! # Store Composition
//!
//! The composition root: creates one [`AuthStore`] and one [`CartStore`]
//! per mounted lifetime and hands out [`StoreScope`] handles that resolve to
//! those shared instances.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Composition Lifecycle                                │
//! │                                                                         │
//! │   new()               mount()                 unmount() / drop          │
//! │     │                    │                          │                   │
//! │     ▼                    ▼                          ▼                   │
//! │  ┌──────────┐      ┌──────────┐              ┌──────────┐              │
//! │  │ Unbound  │─────►│  Bound   │─────────────►│ Released │              │
//! │  └──────────┘      └──────────┘              └──────────┘              │
//! │       │                 │                          │                    │
//! │  scope.cart()      scope.cart()               scope.cart()              │
//! │  NotMounted        Ok(same Arc)               Unmounted                 │
//! │                                                                         │
//! │  mount() on Released starts a new lifetime with fresh stores.           │
//! │  Scopes from an earlier lifetime stay Unmounted.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Consumers keep the [`StoreScope`], not the stores, and resolve the store
//! for every action. That is what lets teardown surface as a [`ScopeError`]
//! on the next access.
//!
//! Every mount starts a new generation. A scope belongs to the generation
//! that was live, or about to start, when it was handed out, and never
//! resolves to the stores of a later one.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use super::{AuthStore, CartStore};
use crate::error::{ScopeError, StoreKind};

#[derive(Debug)]
struct Stores {
    id: Uuid,
    generation: u64,
    mounted_at: DateTime<Utc>,
    auth: Arc<AuthStore>,
    cart: Arc<CartStore>,
}

impl Stores {
    fn new(generation: u64) -> Self {
        Stores {
            id: Uuid::new_v4(),
            generation,
            mounted_at: Utc::now(),
            auth: Arc::new(AuthStore::new()),
            cart: Arc::new(CartStore::new()),
        }
    }
}

#[derive(Debug)]
enum Binding {
    Unbound,
    Bound(Stores),
    Released { generation: u64 },
}

impl Binding {
    /// The generation that is live, or the one the next mount will start.
    fn current_generation(&self) -> u64 {
        match self {
            Binding::Unbound => 1,
            Binding::Bound(stores) => stores.generation,
            Binding::Released { generation } => generation + 1,
        }
    }
}

type SharedBinding = Arc<RwLock<Binding>>;

fn read(binding: &SharedBinding) -> RwLockReadGuard<'_, Binding> {
    binding.read().unwrap_or_else(PoisonError::into_inner)
}

fn write(binding: &SharedBinding) -> RwLockWriteGuard<'_, Binding> {
    binding.write().unwrap_or_else(PoisonError::into_inner)
}

/// Owns the store lifecycle.
///
/// Not `Clone`: there is one owner. Share access through [`StoreScope`].
/// Dropping the composition unmounts it.
#[derive(Debug)]
pub struct StoreComposition {
    binding: SharedBinding,
}

impl StoreComposition {
    /// Creates an unmounted composition.
    pub fn new() -> Self {
        StoreComposition {
            binding: Arc::new(RwLock::new(Binding::Unbound)),
        }
    }

    /// Creates the stores if they do not exist yet and returns a scope.
    ///
    /// Mounting an already mounted composition keeps the existing stores.
    pub fn mount(&self) -> StoreScope {
        let mut binding = write(&self.binding);

        let mounted = match &*binding {
            Binding::Bound(stores) => Some(stores.id),
            Binding::Unbound | Binding::Released { .. } => None,
        };

        if let Some(id) = mounted {
            debug!(composition = %id, "composition already mounted");
        } else {
            let stores = Stores::new(binding.current_generation());
            info!(
                composition = %stores.id,
                generation = stores.generation,
                "store composition mounted"
            );
            *binding = Binding::Bound(stores);
        }

        scope_for(&self.binding, &binding)
    }

    /// Releases both stores. Returns `false` if nothing was mounted.
    pub fn unmount(&self) -> bool {
        let mut binding = write(&self.binding);

        let generation = binding.current_generation();
        match std::mem::replace(&mut *binding, Binding::Released { generation }) {
            Binding::Bound(stores) => {
                let lifetime = Utc::now() - stores.mounted_at;
                info!(
                    composition = %stores.id,
                    lifetime_ms = lifetime.num_milliseconds(),
                    "store composition unmounted"
                );
                true
            }
            previous => {
                *binding = previous;
                false
            }
        }
    }

    pub fn is_mounted(&self) -> bool {
        matches!(&*read(&self.binding), Binding::Bound(_))
    }

    /// A handle for the current generation, or for the next mount if
    /// nothing is mounted right now.
    pub fn scope(&self) -> StoreScope {
        scope_for(&self.binding, &read(&self.binding))
    }
}

fn scope_for(shared: &SharedBinding, binding: &Binding) -> StoreScope {
    StoreScope {
        binding: Arc::clone(shared),
        generation: binding.current_generation(),
    }
}

impl Default for StoreComposition {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for StoreComposition {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Cheap, cloneable access point to the stores of one composition.
///
/// Every clone resolves to the same store instances while its generation
/// is mounted.
#[derive(Debug, Clone)]
pub struct StoreScope {
    binding: SharedBinding,
    generation: u64,
}

impl StoreScope {
    /// A handle that belongs to no composition. Every access fails with
    /// [`ScopeError::NotMounted`].
    pub fn detached() -> Self {
        scope_for(&Arc::new(RwLock::new(Binding::Unbound)), &Binding::Unbound)
    }

    fn resolve<T>(&self, store: StoreKind, pick: impl FnOnce(&Stores) -> &Arc<T>) -> Result<Arc<T>, ScopeError> {
        match &*read(&self.binding) {
            Binding::Bound(stores) if stores.generation == self.generation => {
                Ok(Arc::clone(pick(stores)))
            }
            Binding::Unbound => Err(ScopeError::NotMounted { store }),
            Binding::Bound(_) | Binding::Released { .. } => Err(ScopeError::Unmounted { store }),
        }
    }

    pub fn auth(&self) -> Result<Arc<AuthStore>, ScopeError> {
        self.resolve(StoreKind::Auth, |s| &s.auth)
    }

    pub fn cart(&self) -> Result<Arc<CartStore>, ScopeError> {
        self.resolve(StoreKind::Cart, |s| &s.cart)
    }

    pub fn is_bound(&self) -> bool {
        matches!(
            &*read(&self.binding),
            Binding::Bound(stores) if stores.generation == self.generation
        )
    }
}

impl Default for StoreScope {
    fn default() -> Self {
        Self::detached()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::{Identity, Money, Quantity};

    use crate::state::CartItem;

    #[test]
    fn test_access_before_mount_fails() {
        let composition = StoreComposition::new();
        let scope = composition.scope();

        assert_eq!(
            scope.auth().unwrap_err(),
            ScopeError::NotMounted {
                store: StoreKind::Auth
            }
        );
        assert_eq!(
            scope.cart().unwrap_err(),
            ScopeError::NotMounted {
                store: StoreKind::Cart
            }
        );
        assert!(!scope.is_bound());
    }

    #[test]
    fn test_detached_scope_fails() {
        let scope = StoreScope::detached();
        assert!(matches!(scope.cart(), Err(ScopeError::NotMounted { .. })));
        assert!(matches!(
            StoreScope::default().auth(),
            Err(ScopeError::NotMounted { .. })
        ));
    }

    #[test]
    fn test_mount_binds_existing_scopes() {
        let composition = StoreComposition::new();
        let early = composition.scope();

        composition.mount();

        assert!(early.is_bound());
        assert!(early.auth().is_ok());
        assert!(composition.is_mounted());
    }

    #[test]
    fn test_same_instance_across_accesses() {
        let composition = StoreComposition::new();
        let scope = composition.mount();
        let other = scope.clone();

        assert!(Arc::ptr_eq(&scope.auth().unwrap(), &scope.auth().unwrap()));
        assert!(Arc::ptr_eq(&scope.cart().unwrap(), &other.cart().unwrap()));
        assert!(Arc::ptr_eq(
            &scope.cart().unwrap(),
            &composition.scope().cart().unwrap()
        ));
    }

    #[test]
    fn test_writes_visible_to_every_consumer() {
        let composition = StoreComposition::new();
        let header = composition.mount();
        let product_grid = header.clone();

        product_grid
            .cart()
            .unwrap()
            .add_item(CartItem::new("1", "A", Money::from_cents(100)), Quantity::ONE);

        assert_eq!(header.cart().unwrap().total_quantity(), 1);
    }

    #[test]
    fn test_mount_twice_keeps_stores() {
        let composition = StoreComposition::new();
        let first = composition.mount().cart().unwrap();
        let second = composition.mount().cart().unwrap();

        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_unmount_invalidates_scopes() {
        let composition = StoreComposition::new();
        let scope = composition.mount();

        assert!(composition.unmount());
        assert_eq!(
            scope.cart().unwrap_err(),
            ScopeError::Unmounted {
                store: StoreKind::Cart
            }
        );
        assert!(!composition.is_mounted());
        assert!(!composition.unmount());
    }

    #[test]
    fn test_drop_unmounts() {
        let composition = StoreComposition::new();
        let scope = composition.mount();
        drop(composition);

        assert!(matches!(scope.auth(), Err(ScopeError::Unmounted { .. })));
    }

    #[test]
    fn test_remount_starts_fresh() {
        let composition = StoreComposition::new();
        let scope = composition.mount();
        scope
            .auth()
            .unwrap()
            .sign_in(Identity::new("Ada", "ada@example.com"));
        let old_auth = scope.auth().unwrap();

        composition.unmount();
        let fresh = composition.mount();

        let new_auth = fresh.auth().unwrap();
        assert!(!Arc::ptr_eq(&old_auth, &new_auth));
        assert_eq!(new_auth.current_identity(), None);
        assert!(Arc::ptr_eq(&new_auth, &composition.scope().auth().unwrap()));
    }

    #[test]
    fn test_scope_from_previous_mount_stays_unmounted() {
        let composition = StoreComposition::new();
        let stale = composition.mount();
        let stale_clone = stale.clone();

        composition.unmount();
        composition.mount();

        assert_eq!(
            stale.cart().unwrap_err(),
            ScopeError::Unmounted {
                store: StoreKind::Cart
            }
        );
        assert!(matches!(stale_clone.auth(), Err(ScopeError::Unmounted { .. })));
        assert!(!stale.is_bound());
        assert_eq!(composition.scope().auth().unwrap().current_identity(), None);
    }

    #[test]
    fn test_scope_taken_while_released_binds_to_next_mount() {
        let composition = StoreComposition::new();
        composition.mount();
        composition.unmount();

        let waiting = composition.scope();
        assert!(matches!(waiting.cart(), Err(ScopeError::Unmounted { .. })));

        composition.mount();
        assert!(waiting.is_bound());
        assert!(Arc::ptr_eq(
            &waiting.cart().unwrap(),
            &composition.scope().cart().unwrap()
        ));
    }

    #[test]
    fn test_stores_are_independent() {
        let composition = StoreComposition::new();
        let scope = composition.mount();
        let auth = scope.auth().unwrap();
        let cart = scope.cart().unwrap();

        auth.sign_in(Identity::new("Ada", "ada@example.com"));
        cart.add_item(CartItem::new("1", "A", Money::from_cents(100)), Quantity::ONE);
        auth.sign_out();

        assert_eq!(cart.total_quantity(), 1);
    }
}
