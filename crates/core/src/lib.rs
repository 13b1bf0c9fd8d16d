//! Cart Checkout Core - cart store, order pricing and page view model.
//!
//! This crate holds everything behind the shopping cart page:
//! - [`cart`] - Command-driven cart store with explicit subscriptions
//! - [`pricing`] - Subtotal, shipping, discount and total calculation
//! - [`discount`] - Pluggable discount code lookup
//! - [`page`] - Page-local state, intent routing and the render-free view
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no rendering.
//! Front ends (the `checkout` CLI, tests) own a [`CartStore`], a
//! [`ShoppingPage`] and a [`Navigator`], feed intents in and read
//! [`PageView`]s out.
//!
//! ```rust
//! use cart_checkout_core::{CartState, LineItem, ShoppingPage};
//! use rust_decimal::Decimal;
//!
//! let item = LineItem::new("sku-1", "Pineapple", Decimal::new(1999, 2), 2).unwrap();
//! let cart = CartState::from_items([item]);
//! let view = ShoppingPage::default().view(&cart);
//! assert_eq!(view.summary.unwrap().total, "$44.98");
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod discount;
pub mod page;
pub mod pricing;
pub mod types;

pub use cart::{CartCommand, CartState, CartStore};
pub use discount::{DEFAULT_DISCOUNT_CODE, DiscountLookup, DiscountTable, SingleCodeDiscount};
pub use page::{
    EMPTY_CART_MESSAGE, LineItemView, Navigator, PageIntent, PageView, ShippingChoice, ShoppingPage,
    SummaryView,
};
pub use pricing::{
    OrderSummary, PricingRules, ShippingRates, TotalPolicy, compute_discount, compute_shipping_cost,
    compute_subtotal, compute_total,
};
pub use types::*;
