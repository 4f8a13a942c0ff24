//! Mercado Core - Shared types library.
//!
//! This crate provides common types used across all Mercado components:
//! - `cart` - Cart state machine, persistence, and summary view model
//! - `cli` - Command-line tools for inspecting and mutating a cart
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access. This
//! keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and prices

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
