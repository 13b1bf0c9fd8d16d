//! Integration tests for Cart Checkout.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p cart-checkout-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `order_totals` - Calculator scenarios end to end through the page
//! - `shopping_session` - Store, page and navigator driven together
//!
//! This library holds the shared builders those tests use.

#![cfg_attr(not(test), forbid(unsafe_code))]

use cart_checkout_core::{CartState, CartStore, LineItem, LineItemError, Navigator};
use rust_decimal::Decimal;

/// Decimal from a count of cents.
#[must_use]
pub fn cents(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

/// A line item with the given id, unit price in cents and quantity.
///
/// # Errors
///
/// Returns the validation error if the item is invalid.
pub fn line_item(id: &str, price_cents: i64, quantity: u32) -> Result<LineItem, LineItemError> {
    LineItem::new(id, format!("Product {id}"), cents(price_cents), quantity)
        .map(|item| item.with_description(format!("Description of {id}")))
}

/// A store holding the given items.
#[must_use]
pub fn store_with(items: impl IntoIterator<Item = LineItem>) -> CartStore {
    CartStore::new(CartState::from_items(items))
}

/// Counts how often the page sent the user home.
#[derive(Debug, Default)]
pub struct CountingNavigator {
    pub home_visits: usize,
}

impl Navigator for CountingNavigator {
    fn go_to_home(&mut self) {
        self.home_visits += 1;
    }
}
