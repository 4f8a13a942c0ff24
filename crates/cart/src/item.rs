//! Cart line items.
//!
//! Field names are part of the persisted wire format: a cart is stored as
//! a JSON array of objects with exactly `id`, `title`, `image_url`,
//! `price`, `quantity`. Renaming a field here is a storage format change.

use serde::{Deserialize, Serialize};

use mercado_core::{Price, ProductId};

/// One distinct product in the cart, with quantity.
///
/// `title` and `image_url` are descriptive metadata, opaque to cart logic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: ProductId,
    pub title: String,
    pub image_url: String,
    pub price: Price,
    /// Always `>= 1`; decrementing floors at 1 rather than removing.
    pub quantity: u32,
}

impl LineItem {
    /// Price of this line (`unit price * quantity`).
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price * self.quantity
    }
}

/// A product about to enter the cart - a [`LineItem`] without quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewLineItem {
    pub id: ProductId,
    pub title: String,
    pub image_url: String,
    pub price: Price,
}

impl NewLineItem {
    /// Promote to a full line item with an initial quantity of 1.
    #[must_use]
    pub fn into_line_item(self) -> LineItem {
        LineItem {
            id: self.id,
            title: self.title,
            image_url: self.image_url,
            price: self.price,
            quantity: 1,
        }
    }
}
