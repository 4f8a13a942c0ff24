//! The cart store: owns the cart state and mirrors it to storage.
//!
//! [`CartStore`] is the only writer of cart state. Every mutation applies
//! the pure [`Cart`] operation first, then persists the freshly computed
//! state in the same call - the persisted blob always reflects the latest
//! in-memory value, never a snapshot captured before the update settled.
//!
//! Persistence failures never fail a mutation: the in-memory state stays
//! authoritative for the session and the failure is logged.

use mercado_core::{Price, ProductId};

use crate::item::{LineItem, NewLineItem};
use crate::state::Cart;
use crate::storage::{BlobStore, StorageError};

/// The fixed key the serialized cart is stored under.
pub const DEFAULT_STORAGE_KEY: &str = "cart.v1";

/// Single source of truth for cart contents.
pub struct CartStore {
    cart: Cart,
    storage: Box<dyn BlobStore>,
    key: String,
}

impl CartStore {
    /// Open a cart store, restoring persisted state from `storage`.
    ///
    /// Restore is fail-safe: a missing blob yields an empty cart, and a
    /// malformed or unreadable blob is logged and treated as empty rather
    /// than propagated.
    #[must_use]
    pub fn open(storage: Box<dyn BlobStore>, key: impl Into<String>) -> Self {
        let mut store = Self {
            cart: Cart::new(),
            storage,
            key: key.into(),
        };
        store.restore();
        store
    }

    /// Open a cart store under [`DEFAULT_STORAGE_KEY`].
    #[must_use]
    pub fn open_default(storage: Box<dyn BlobStore>) -> Self {
        Self::open(storage, DEFAULT_STORAGE_KEY)
    }

    /// Load persisted state into memory, replacing the current cart.
    ///
    /// Called once from [`open`](Self::open); exposed for callers that
    /// need to re-read after an external change to the blob store.
    pub fn restore(&mut self) {
        self.cart = match self.storage.get(&self.key) {
            Ok(Some(bytes)) => match serde_json::from_slice(&bytes) {
                Ok(cart) => cart,
                Err(e) => {
                    tracing::warn!(key = %self.key, error = %e, "corrupt cart blob, starting empty");
                    Cart::new()
                }
            },
            Ok(None) => Cart::new(),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "failed to read cart blob, starting empty");
                Cart::new()
            }
        };
    }

    /// Add a product to the cart and persist the result.
    ///
    /// An existing product is incremented instead of duplicated.
    pub fn add_to_cart(&mut self, item: NewLineItem) {
        tracing::debug!(id = %item.id, "add to cart");
        self.cart.add(item);
        self.persist();
    }

    /// Increment the quantity of `id` by 1 and persist the result.
    /// No-op if `id` is not in the cart.
    pub fn increment(&mut self, id: &ProductId) {
        tracing::debug!(%id, "increment");
        self.cart.increment(id);
        self.persist();
    }

    /// Decrement the quantity of `id` by 1, floored at 1, and persist
    /// the result. No-op if `id` is not in the cart.
    pub fn decrement(&mut self, id: &ProductId) {
        tracing::debug!(%id, "decrement");
        self.cart.decrement(id);
        self.persist();
    }

    /// Read-only view of the current line items.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        self.cart.items()
    }

    /// The current cart state.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Sum of `price * quantity` over the current cart.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.cart.total_price()
    }

    /// Sum of quantities over the current cart.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.cart.total_quantity()
    }

    /// Remove every blob from the backing store and empty the cart.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the underlying storage fails; the
    /// in-memory cart is emptied regardless.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.cart = Cart::new();
        self.storage.clear()
    }

    /// Mirror the current cart to the blob store.
    ///
    /// Serializes the state the mutation just produced. Failures are
    /// logged and swallowed: the in-memory cart stays authoritative.
    fn persist(&self) {
        let bytes = match serde_json::to_vec(&self.cart) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "failed to serialize cart");
                return;
            }
        };

        if let Err(e) = self.storage.set(&self.key, &bytes) {
            tracing::warn!(key = %self.key, error = %e, "failed to persist cart");
        }
    }
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("cart", &self.cart)
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}
