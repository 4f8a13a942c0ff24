//! Shared helpers for Mercado integration tests.
//!
//! The tests themselves live in `tests/`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::str::FromStr;

use mercado_cart::NewLineItem;
use mercado_core::{Price, ProductId};

/// Build a catalog product for test carts.
///
/// # Panics
///
/// Panics if `price` is not a valid non-negative decimal.
#[must_use]
pub fn catalog_item(id: &str, price: &str) -> NewLineItem {
    NewLineItem {
        id: ProductId::new(id),
        title: format!("Product {id}"),
        image_url: format!("https://cdn.example.com/{id}.png"),
        price: Price::from_str(price).expect("test price must be valid"),
    }
}
