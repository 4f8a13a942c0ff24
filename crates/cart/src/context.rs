//! Shared cart handle for consumers.
//!
//! One [`CartStore`] instance serves a whole UI subtree. Rather than an
//! ambient global looked up at call sites, the store is wrapped once in a
//! [`CartContext`] and handed to every consumer explicitly - a consumer
//! without a context cannot compile, so "cart used outside a provider"
//! is unrepresentable rather than a runtime error.
//!
//! The context is cheaply cloneable; all clones share the same store.

use std::sync::{Arc, PoisonError, RwLock};

use mercado_core::{Price, ProductId};

use crate::item::{LineItem, NewLineItem};
use crate::state::Cart;
use crate::storage::StorageError;
use crate::store::CartStore;

/// Cheaply cloneable shared handle to a [`CartStore`].
///
/// Mutations go through the store's operations; reads hand out snapshots
/// so consumers never hold the lock across their own work.
#[derive(Clone, Debug)]
pub struct CartContext {
    inner: Arc<RwLock<CartStore>>,
}

impl CartContext {
    /// Wrap a store in a shareable context.
    #[must_use]
    pub fn new(store: CartStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// Add a product to the cart, incrementing if already present.
    pub fn add_to_cart(&self, item: NewLineItem) {
        self.write().add_to_cart(item);
    }

    /// Increment the quantity of `id` by 1; no-op if unknown.
    pub fn increment(&self, id: &ProductId) {
        self.write().increment(id);
    }

    /// Decrement the quantity of `id` by 1, floored at 1; no-op if
    /// unknown.
    pub fn decrement(&self, id: &ProductId) {
        self.write().decrement(id);
    }

    /// Snapshot of the current line items, in insertion order.
    #[must_use]
    pub fn items(&self) -> Vec<LineItem> {
        self.read().items().to_vec()
    }

    /// Snapshot of the current cart state.
    #[must_use]
    pub fn cart(&self) -> Cart {
        self.read().cart().clone()
    }

    /// Sum of `price * quantity` over the current cart.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.read().total_price()
    }

    /// Sum of quantities over the current cart.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.read().total_quantity()
    }

    /// Empty the cart and the backing store.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing store fails to clear.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.write().clear()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, CartStore> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, CartStore> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}
