//! Cart command implementations.

use thiserror::Error;

use mercado_cart::{
    CartContext, CurrencyFormatter, FloatingCart, Navigator, NewLineItem, UsdFormatter,
};
use mercado_core::{Price, ProductId};

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("storage error: {0}")]
    Storage(#[from] mercado_cart::StorageError),
}

/// The CLI has no cart screen to navigate to.
struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn navigate(&self, _destination: &str) {}
}

/// Add a product to the cart, incrementing if already present.
pub fn add(
    context: &CartContext,
    id: ProductId,
    title: String,
    image_url: String,
    price: Price,
) -> Result<(), CommandError> {
    context.add_to_cart(NewLineItem {
        id: id.clone(),
        title,
        image_url,
        price,
    });

    let quantity = context.items().iter().find_map(|line| {
        if line.id == id {
            Some(line.quantity)
        } else {
            None
        }
    });
    println!("{id}: quantity {}", quantity.unwrap_or(0));
    Ok(())
}

/// Increment a product's quantity by 1.
pub fn increment(context: &CartContext, id: &ProductId) -> Result<(), CommandError> {
    context.increment(id);
    show(context)
}

/// Decrement a product's quantity by 1, floored at 1.
pub fn decrement(context: &CartContext, id: &ProductId) -> Result<(), CommandError> {
    context.decrement(id);
    show(context)
}

/// Print line items and totals.
pub fn show(context: &CartContext) -> Result<(), CommandError> {
    let formatter = UsdFormatter;

    for line in context.items() {
        println!(
            "{:<24} x{:<4} {:>10} {:>12}",
            line.id,
            line.quantity,
            formatter.format(line.price),
            formatter.format(line.line_total()),
        );
    }

    let widget = FloatingCart::new(
        context.clone(),
        Box::new(NoopNavigator),
        Box::new(formatter),
    );
    let summary = widget.summary();
    println!("{} | total {}", summary.item_count_label, summary.total_label);
    Ok(())
}

/// Wipe the persisted cart.
pub fn clear(context: &CartContext) -> Result<(), CommandError> {
    context.clear()?;
    println!("cart cleared");
    Ok(())
}
