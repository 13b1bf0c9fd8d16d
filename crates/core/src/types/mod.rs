//! Core types for the cart.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod line_item;
pub mod price;
pub mod shipping;

pub use id::*;
pub use line_item::{LineItem, LineItemError};
pub use price::{CurrencyCode, Price, format_amount};
pub use shipping::ShippingOption;
