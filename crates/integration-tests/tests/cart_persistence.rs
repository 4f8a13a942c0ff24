//! End-to-end persistence flows over the file-backed store.

#![allow(clippy::unwrap_used)]

use mercado_cart::{BlobStore, Cart, CartContext, CartStore, DEFAULT_STORAGE_KEY, FileStore};
use mercado_core::{Price, ProductId};
use mercado_integration_tests::catalog_item;
use std::str::FromStr;

#[test]
fn cart_survives_reopen_with_items_quantities_and_order() {
    let dir = tempfile::tempdir().unwrap();

    {
        let store = FileStore::new(dir.path());
        let ctx = CartContext::new(CartStore::open_default(Box::new(store)));
        ctx.add_to_cart(catalog_item("mug-red", "12.50"));
        ctx.add_to_cart(catalog_item("tee-black", "25.00"));
        ctx.add_to_cart(catalog_item("mug-red", "12.50"));
        ctx.increment(&ProductId::new("tee-black"));
        ctx.decrement(&ProductId::new("tee-black"));
    }

    let reopened = CartStore::open_default(Box::new(FileStore::new(dir.path())));
    let ids: Vec<_> = reopened
        .items()
        .iter()
        .map(|line| line.id.as_str().to_string())
        .collect();

    assert_eq!(ids, ["mug-red", "tee-black"]);
    assert_eq!(reopened.items()[0].quantity, 2);
    assert_eq!(reopened.items()[1].quantity, 1);
    assert_eq!(reopened.total_quantity(), 3);
    assert_eq!(reopened.total_price(), Price::from_str("50.00").unwrap());
}

#[test]
fn persisted_blob_tracks_every_mutation() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = CartContext::new(CartStore::open_default(Box::new(FileStore::new(dir.path()))));

    let persisted = |expect: &Cart| {
        let bytes = FileStore::new(dir.path())
            .get(DEFAULT_STORAGE_KEY)
            .unwrap()
            .unwrap();
        let cart: Cart = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(&cart, expect);
    };

    ctx.add_to_cart(catalog_item("a", "10.00"));
    persisted(&ctx.cart());

    ctx.increment(&ProductId::new("a"));
    persisted(&ctx.cart());

    ctx.add_to_cart(catalog_item("b", "5.25"));
    persisted(&ctx.cart());

    ctx.decrement(&ProductId::new("a"));
    persisted(&ctx.cart());
}

#[test]
fn restore_with_no_blob_yields_empty_cart() {
    let dir = tempfile::tempdir().unwrap();
    let store = CartStore::open_default(Box::new(FileStore::new(dir.path())));
    assert!(store.items().is_empty());
}

#[test]
fn restore_with_corrupt_blob_fails_safe_to_empty() {
    let dir = tempfile::tempdir().unwrap();

    let blobs = FileStore::new(dir.path());
    blobs.set(DEFAULT_STORAGE_KEY, b"definitely not json").unwrap();

    let store = CartStore::open_default(Box::new(FileStore::new(dir.path())));
    assert!(store.items().is_empty());
}

#[test]
fn clear_wipes_the_persisted_cart() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = CartContext::new(CartStore::open_default(Box::new(FileStore::new(dir.path()))));

    ctx.add_to_cart(catalog_item("a", "10.00"));
    ctx.clear().unwrap();

    let reopened = CartStore::open_default(Box::new(FileStore::new(dir.path())));
    assert!(reopened.items().is_empty());
}

#[test]
fn wire_format_matches_the_storage_contract() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = CartContext::new(CartStore::open_default(Box::new(FileStore::new(dir.path()))));
    ctx.add_to_cart(catalog_item("mug-red", "12.50"));

    let bytes = FileStore::new(dir.path())
        .get(DEFAULT_STORAGE_KEY)
        .unwrap()
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(
        value,
        serde_json::json!([{
            "id": "mug-red",
            "title": "Product mug-red",
            "image_url": "https://cdn.example.com/mug-red.png",
            "price": 12.5,
            "quantity": 1,
        }])
    );
}
