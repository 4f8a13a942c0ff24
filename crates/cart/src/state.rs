//! The pure cart state machine.
//!
//! [`Cart`] is an ordered sequence of [`LineItem`], unique by product ID.
//! All mutations preserve two invariants:
//!
//! - no two line items share an `id` (adding an existing product
//!   increments it instead of inserting a duplicate)
//! - every quantity is `>= 1` (decrement floors at 1; it never removes)
//!
//! No I/O happens here; persistence is layered on top by
//! [`crate::store::CartStore`].

use serde::{Deserialize, Serialize};

use mercado_core::{Price, ProductId};

use crate::item::{LineItem, NewLineItem};

/// The full ordered list of cart line items at a point in time.
///
/// Serializes as a bare JSON array of line items, the persisted wire
/// format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Read-only view of the line items, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Whether the cart has no line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct products (not total quantity).
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Look up a line item by product ID.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Add a product to the cart.
    ///
    /// If a line item with the same `id` already exists its quantity is
    /// incremented by 1; otherwise the product is appended to the end of
    /// the sequence with quantity 1.
    pub fn add(&mut self, item: NewLineItem) {
        match self.items.iter_mut().find(|line| line.id == item.id) {
            Some(line) => line.quantity += 1,
            None => self.items.push(item.into_line_item()),
        }
    }

    /// Increment the quantity of the line item matching `id` by 1.
    ///
    /// Silent no-op if `id` is not in the cart.
    pub fn increment(&mut self, id: &ProductId) {
        if let Some(line) = self.items.iter_mut().find(|line| &line.id == id) {
            line.quantity += 1;
        }
    }

    /// Decrement the quantity of the line item matching `id` by 1,
    /// never below 1.
    ///
    /// Silent no-op if `id` is not in the cart or the quantity is
    /// already 1. The floor is deliberate: reaching the minimum keeps
    /// the product in the cart rather than deleting it.
    pub fn decrement(&mut self, id: &ProductId) {
        if let Some(line) = self
            .items
            .iter_mut()
            .find(|line| &line.id == id && line.quantity > 1)
        {
            line.quantity -= 1;
        }
    }

    /// Sum of `price * quantity` over all line items.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Sum of quantities over all line items.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|line| u64::from(line.quantity)).sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn new_item(id: &str, price: &str) -> NewLineItem {
        NewLineItem {
            id: ProductId::new(id),
            title: format!("Product {id}"),
            image_url: format!("https://cdn.example.com/{id}.png"),
            price: Price::from_str(price).unwrap(),
        }
    }

    #[test]
    fn test_add_new_product_appends_with_quantity_one() {
        let mut cart = Cart::new();
        cart.add(new_item("b", "5"));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(&ProductId::new("b")).unwrap().quantity, 1);
        assert_eq!(cart.total_price(), Price::from_str("5").unwrap());
        assert_eq!(cart.total_quantity(), 1);
    }

    #[test]
    fn test_add_existing_product_increments_instead_of_duplicating() {
        let mut cart = Cart::new();
        cart.add(new_item("a", "10"));
        cart.add(new_item("a", "10"));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(&ProductId::new("a")).unwrap().quantity, 2);
        assert_eq!(cart.total_price(), Price::from_str("20").unwrap());
        assert_eq!(cart.total_quantity(), 2);
    }

    #[test]
    fn test_add_on_existing_id_equivalent_to_increment() {
        let mut via_add = Cart::new();
        via_add.add(new_item("a", "10"));
        via_add.add(new_item("a", "10"));

        let mut via_increment = Cart::new();
        via_increment.add(new_item("a", "10"));
        via_increment.increment(&ProductId::new("a"));

        assert_eq!(via_add, via_increment);
    }

    #[test]
    fn test_increment_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.add(new_item("a", "10"));
        cart.increment(&ProductId::new("missing"));

        assert_eq!(cart.total_quantity(), 1);
    }

    #[test]
    fn test_decrement_floors_at_one() {
        let mut cart = Cart::new();
        cart.add(new_item("a", "10"));
        cart.decrement(&ProductId::new("a"));

        // quantity stays 1, the item is not removed
        assert_eq!(cart.get(&ProductId::new("a")).unwrap().quantity, 1);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_decrement_above_floor() {
        let mut cart = Cart::new();
        cart.add(new_item("a", "10"));
        cart.increment(&ProductId::new("a"));
        cart.increment(&ProductId::new("a"));
        cart.decrement(&ProductId::new("a"));

        assert_eq!(cart.get(&ProductId::new("a")).unwrap().quantity, 2);
    }

    #[test]
    fn test_decrement_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.add(new_item("a", "10"));
        cart.decrement(&ProductId::new("missing"));

        assert_eq!(cart.get(&ProductId::new("a")).unwrap().quantity, 1);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = Cart::new();
        cart.add(new_item("c", "1"));
        cart.add(new_item("a", "2"));
        cart.add(new_item("b", "3"));
        cart.increment(&ProductId::new("a"));

        let ids: Vec<_> = cart.items().iter().map(|line| line.id.as_str()).collect();
        assert_eq!(ids, ["c", "a", "b"]);
    }

    #[test]
    fn test_id_uniqueness_under_mixed_operations() {
        let mut cart = Cart::new();
        for _ in 0..3 {
            cart.add(new_item("a", "10"));
            cart.add(new_item("b", "5"));
            cart.increment(&ProductId::new("a"));
            cart.decrement(&ProductId::new("b"));
        }

        let mut ids: Vec<_> = cart.items().iter().map(|line| line.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), cart.len());
    }

    #[test]
    fn test_totals_are_pure_recomputation() {
        let mut cart = Cart::new();
        cart.add(new_item("a", "10"));
        assert_eq!(cart.total_price(), Price::from_str("10").unwrap());

        cart.add(new_item("a", "10"));
        assert_eq!(cart.total_price(), Price::from_str("20").unwrap());
        assert_eq!(cart.total_quantity(), 2);

        // calling again does not accumulate
        assert_eq!(cart.total_price(), Price::from_str("20").unwrap());
        assert_eq!(cart.total_quantity(), 2);
    }

    #[test]
    fn test_serde_round_trip_preserves_items_and_order() {
        let mut cart = Cart::new();
        cart.add(new_item("b", "5.25"));
        cart.add(new_item("a", "10.00"));
        cart.increment(&ProductId::new("b"));

        let json = serde_json::to_string(&cart).unwrap();
        let back: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cart);
    }

    #[test]
    fn test_serializes_as_bare_array() {
        let mut cart = Cart::new();
        cart.add(new_item("a", "10"));

        let value = serde_json::to_value(&cart).unwrap();
        assert!(value.is_array());
        assert_eq!(value.as_array().unwrap().len(), 1);
    }
}
