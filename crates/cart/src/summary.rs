//! Floating cart summary view model.
//!
//! [`FloatingCart`] is a read-only consumer of a [`CartContext`]: it
//! derives the aggregate totals for the floating summary widget and owns
//! the single navigation affordance into the detailed cart screen.
//! Navigation and currency rules live behind collaborator traits; the
//! view model never mutates cart state.

use mercado_core::Price;

use crate::context::CartContext;

/// Destination identifier for the detailed cart screen.
pub const CART_DESTINATION: &str = "Cart";

/// Navigation collaborator: routes the user to a named destination.
pub trait Navigator {
    /// Request navigation to `destination`.
    fn navigate(&self, destination: &str);
}

/// Currency formatting collaborator; locale and currency rules are
/// opaque to cart logic.
pub trait CurrencyFormatter {
    /// Render `amount` for display.
    fn format(&self, amount: Price) -> String;
}

/// Plain `$X.XX` formatter, the store's default currency rendering.
#[derive(Debug, Clone, Copy, Default)]
pub struct UsdFormatter;

impl CurrencyFormatter for UsdFormatter {
    fn format(&self, amount: Price) -> String {
        format!("${:.2}", amount.amount())
    }
}

/// Derived display data for the floating cart widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSummary {
    /// Total quantity across all line items.
    pub item_count: u64,
    /// Item-count badge text, e.g. `3 items`.
    pub item_count_label: String,
    /// Formatted total price, e.g. `$42.00`.
    pub total_label: String,
}

/// Read-only floating cart widget view model.
pub struct FloatingCart {
    context: CartContext,
    navigator: Box<dyn Navigator>,
    formatter: Box<dyn CurrencyFormatter>,
}

impl FloatingCart {
    /// Build the view model from its injected collaborators.
    #[must_use]
    pub fn new(
        context: CartContext,
        navigator: Box<dyn Navigator>,
        formatter: Box<dyn CurrencyFormatter>,
    ) -> Self {
        Self {
            context,
            navigator,
            formatter,
        }
    }

    /// Derive the current summary from the cart state.
    ///
    /// Recomputed from scratch on every call: a pure function of the
    /// cart, with no accumulation across renders.
    #[must_use]
    pub fn summary(&self) -> CartSummary {
        let cart = self.context.cart();
        let item_count = cart.total_quantity();

        CartSummary {
            item_count,
            item_count_label: format!("{item_count} items"),
            total_label: self.formatter.format(cart.total_price()),
        }
    }

    /// Activate the widget: request navigation to the detailed cart
    /// screen. Mutates nothing.
    pub fn open_cart(&self) {
        self.navigator.navigate(CART_DESTINATION);
    }
}
