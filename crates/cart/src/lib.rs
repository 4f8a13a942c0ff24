//! Mercado Cart - cart state and persistence library.
//!
//! This crate is the single source of truth for cart contents:
//!
//! - [`state::Cart`] - the pure cart state machine (ordered line items,
//!   unique by product ID, quantities floored at 1)
//! - [`storage::BlobStore`] - opaque key-value persistence seam, with
//!   in-memory and file-backed implementations
//! - [`store::CartStore`] - owns a `Cart`, restores it at startup, and
//!   mirrors every mutation to the blob store
//! - [`context::CartContext`] - cheaply cloneable shared handle injected
//!   into consumers
//! - [`summary::FloatingCart`] - read-only view model deriving the item
//!   count and total price labels
//!
//! Data flow is one-directional: the store owns the list, consumers
//! derive from snapshots and never mutate outside the store's operations.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod context;
pub mod item;
pub mod state;
pub mod storage;
pub mod store;
pub mod summary;

pub use config::{CartConfig, ConfigError};
pub use context::CartContext;
pub use item::{LineItem, NewLineItem};
pub use state::Cart;
pub use storage::{BlobStore, FileStore, MemoryStore, StorageError};
pub use store::{CartStore, DEFAULT_STORAGE_KEY};
pub use summary::{
    CART_DESTINATION, CartSummary, CurrencyFormatter, FloatingCart, Navigator, UsdFormatter,
};
