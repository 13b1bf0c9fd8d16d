//! Order total calculation.
//!
//! Everything here is a pure function of its inputs. Callers recompute after
//! each cart or page change; nothing is cached.
//!
//! The free functions ([`compute_subtotal`], [`compute_shipping_cost`],
//! [`compute_discount`], [`compute_total`]) use the default storefront rules:
//! standard delivery 5.00, express 10.00, `DISCOUNT10` worth 10.00, and no
//! lower bound on the total. [`PricingRules`] carries the same operations with
//! configurable rates, discount lookup and [`TotalPolicy`].

use rust_decimal::Decimal;
use serde::Serialize;

use crate::discount::{DiscountLookup, SingleCodeDiscount};
use crate::types::{CurrencyCode, LineItem, ShippingOption, format_amount};

/// Sum of `price * quantity` over all items; zero when there are none.
#[must_use]
pub fn compute_subtotal(items: &[LineItem]) -> Decimal {
    items
        .iter()
        .fold(Decimal::ZERO, |acc, item| acc.saturating_add(item.line_total()))
}

/// 10.00 for express delivery, 5.00 for standard.
#[must_use]
pub fn compute_shipping_cost(option: ShippingOption) -> Decimal {
    ShippingRates::default().cost(option)
}

/// 10.00 if `code` is exactly `DISCOUNT10`, otherwise zero.
#[must_use]
pub fn compute_discount(code: &str) -> Decimal {
    SingleCodeDiscount::default().discount_for(code)
}

/// `subtotal + shipping - discount` with exactly two decimals.
///
/// No lower bound is applied, so a large discount on a small order produces a
/// negative total (`"-4.00"`).
#[must_use]
pub fn compute_total(subtotal: Decimal, shipping_cost: Decimal, discount: Decimal) -> String {
    format_amount(TotalPolicy::AllowNegative.apply(subtotal, shipping_cost, discount))
}

/// Fixed cost of each delivery tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShippingRates {
    pub standard: Decimal,
    pub express: Decimal,
}

impl ShippingRates {
    #[must_use]
    pub const fn new(standard: Decimal, express: Decimal) -> Self {
        Self { standard, express }
    }

    #[must_use]
    pub const fn cost(&self, option: ShippingOption) -> Decimal {
        match option {
            ShippingOption::ExpressDelivery => self.express,
            ShippingOption::StandardDelivery => self.standard,
        }
    }
}

impl Default for ShippingRates {
    fn default() -> Self {
        Self::new(Decimal::from(5), Decimal::from(10))
    }
}

/// What to do when the discount exceeds subtotal plus shipping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TotalPolicy {
    /// Report the raw difference, which may be negative.
    #[default]
    AllowNegative,
    /// Never report less than zero.
    ClampAtZero,
}

impl TotalPolicy {
    #[must_use]
    pub fn apply(self, subtotal: Decimal, shipping_cost: Decimal, discount: Decimal) -> Decimal {
        let total = subtotal
            .saturating_add(shipping_cost)
            .saturating_sub(discount);
        match self {
            Self::AllowNegative => total,
            Self::ClampAtZero => total.max(Decimal::ZERO),
        }
    }
}

/// Derived order figures. Never stored; rebuild with [`PricingRules::summarize`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    pub subtotal: Decimal,
    pub shipping_cost: Decimal,
    pub discount: Decimal,
    /// Total formatted to two decimals, e.g. `"44.98"`.
    pub total: String,
}

/// Pricing configuration for a storefront.
#[derive(Debug)]
pub struct PricingRules {
    pub currency: CurrencyCode,
    pub shipping: ShippingRates,
    pub total_policy: TotalPolicy,
    discounts: Box<dyn DiscountLookup>,
}

impl Default for PricingRules {
    fn default() -> Self {
        Self {
            currency: CurrencyCode::default(),
            shipping: ShippingRates::default(),
            total_policy: TotalPolicy::default(),
            discounts: Box::new(SingleCodeDiscount::default()),
        }
    }
}

impl PricingRules {
    /// Replace the discount lookup.
    #[must_use]
    pub fn with_discounts(mut self, discounts: impl DiscountLookup + 'static) -> Self {
        self.discounts = Box::new(discounts);
        self
    }

    #[must_use]
    pub fn with_shipping(mut self, shipping: ShippingRates) -> Self {
        self.shipping = shipping;
        self
    }

    #[must_use]
    pub fn with_total_policy(mut self, total_policy: TotalPolicy) -> Self {
        self.total_policy = total_policy;
        self
    }

    #[must_use]
    pub fn with_currency(mut self, currency: CurrencyCode) -> Self {
        self.currency = currency;
        self
    }

    #[must_use]
    pub const fn shipping_cost(&self, option: ShippingOption) -> Decimal {
        self.shipping.cost(option)
    }

    #[must_use]
    pub fn discount(&self, code: &str) -> Decimal {
        self.discounts.discount_for(code)
    }

    /// Total as a number, after applying the configured [`TotalPolicy`].
    #[must_use]
    pub fn total_amount(&self, subtotal: Decimal, shipping_cost: Decimal, discount: Decimal) -> Decimal {
        self.total_policy.apply(subtotal, shipping_cost, discount)
    }

    /// Compute every figure for the given cart and page state.
    #[must_use]
    pub fn summarize(&self, items: &[LineItem], option: ShippingOption, code: &str) -> OrderSummary {
        let subtotal = compute_subtotal(items);
        let shipping_cost = self.shipping_cost(option);
        let discount = self.discount(code);
        let total = format_amount(self.total_amount(subtotal, shipping_cost, discount));

        OrderSummary {
            subtotal,
            shipping_cost,
            discount,
            total,
        }
    }
}
