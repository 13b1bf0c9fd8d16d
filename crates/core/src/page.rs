//! Shopping cart page view model.
//!
//! [`ShoppingPage`] owns the page-local state (selected shipping tier and the
//! discount code being typed), routes user intents to the [`CartStore`] or the
//! [`Navigator`], and builds a render-free [`PageView`] on demand. Call
//! [`ShoppingPage::view`] after every intent; the page keeps no derived
//! figures between calls.

use serde::{Deserialize, Serialize};

use crate::cart::{CartCommand, CartState, CartStore};
use crate::pricing::PricingRules;
use crate::types::{LineItemId, Price, ShippingOption};

/// Message shown in place of the item list when the cart has no lines.
pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty.";

/// Moves the user to other parts of the storefront.
pub trait Navigator {
    /// Leave the cart and return to the shop's home page.
    fn go_to_home(&mut self);
}

/// Something the user did on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "intent", content = "value", rename_all = "snake_case")]
pub enum PageIntent {
    Remove(LineItemId),
    Increment(LineItemId),
    Decrement(LineItemId),
    SelectShipping(ShippingOption),
    EnterDiscountCode(String),
    BackToShop,
    /// Accepted but not wired to any order submission.
    Checkout,
}

/// Page-local state plus the rules used to price it.
#[derive(Debug, Default)]
pub struct ShoppingPage {
    shipping_option: ShippingOption,
    discount_code: String,
    rules: PricingRules,
}

impl ShoppingPage {
    /// A freshly mounted page: standard delivery, no discount code.
    #[must_use]
    pub fn new(rules: PricingRules) -> Self {
        Self {
            rules,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn shipping_option(&self) -> ShippingOption {
        self.shipping_option
    }

    #[must_use]
    pub fn discount_code(&self) -> &str {
        &self.discount_code
    }

    #[must_use]
    pub const fn rules(&self) -> &PricingRules {
        &self.rules
    }

    pub fn select_shipping(&mut self, option: ShippingOption) {
        self.shipping_option = option;
    }

    /// Replace the discount code with exactly what was typed.
    pub fn enter_discount_code(&mut self, code: impl Into<String>) {
        self.discount_code = code.into();
    }

    /// Route an intent to the store, the navigator, or the page itself.
    pub fn handle(&mut self, intent: PageIntent, store: &mut CartStore, navigator: &mut impl Navigator) {
        match intent {
            PageIntent::Remove(id) => store.dispatch(CartCommand::Remove(id)),
            PageIntent::Increment(id) => store.dispatch(CartCommand::IncrementQuantity(id)),
            PageIntent::Decrement(id) => store.dispatch(CartCommand::DecrementQuantity(id)),
            PageIntent::SelectShipping(option) => {
                tracing::debug!(shipping = %option, "shipping option selected");
                self.select_shipping(option);
            }
            PageIntent::EnterDiscountCode(code) => {
                tracing::debug!(length = code.len(), "discount code entered");
                self.enter_discount_code(code);
            }
            PageIntent::BackToShop => {
                tracing::info!("navigating back to shop");
                navigator.go_to_home();
            }
            PageIntent::Checkout => {
                tracing::info!(
                    items = store.state().items().len(),
                    "checkout requested; no order submission is configured"
                );
            }
        }
    }

    /// Build the view for the given cart contents.
    ///
    /// The order summary is `None` for an empty cart: the panel is hidden,
    /// not shown with zeroes.
    #[must_use]
    pub fn view(&self, cart: &CartState) -> PageView {
        let currency = self.rules.currency;
        let items: Vec<LineItemView> = cart
            .items()
            .iter()
            .map(|item| LineItemView {
                id: item.id().clone(),
                name: item.name().to_owned(),
                description: item.description().to_owned(),
                image: item.image().to_owned(),
                quantity: item.quantity(),
                unit_price: Price::new(item.price(), currency).display(),
                line_total: Price::new(item.line_total(), currency).display(),
            })
            .collect();

        if items.is_empty() {
            return PageView {
                items,
                empty_message: Some(EMPTY_CART_MESSAGE),
                summary: None,
            };
        }

        let summary = self
            .rules
            .summarize(cart.items(), self.shipping_option, &self.discount_code);

        let shipping_choices = ShippingOption::ALL
            .iter()
            .map(|&option| ShippingChoice {
                option,
                caption: format!(
                    "{} - {}",
                    option.label(),
                    Price::new(self.rules.shipping_cost(option), currency).display()
                ),
                selected: option == self.shipping_option,
            })
            .collect();

        PageView {
            items,
            empty_message: None,
            summary: Some(SummaryView {
                item_count: cart.total_quantity(),
                subtotal: Price::new(summary.subtotal, currency).display(),
                shipping_choices,
                discount_code: self.discount_code.clone(),
                total: format!("{}{}", currency.symbol(), summary.total),
            }),
        }
    }
}

/// Everything needed to draw the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    pub items: Vec<LineItemView>,
    pub empty_message: Option<&'static str>,
    pub summary: Option<SummaryView>,
}

/// One row of the cart list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItemView {
    pub id: LineItemId,
    pub name: String,
    pub description: String,
    pub image: String,
    pub quantity: u32,
    pub unit_price: String,
    pub line_total: String,
}

/// The order summary panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryView {
    /// Total quantity across all lines.
    pub item_count: u64,
    pub subtotal: String,
    pub shipping_choices: Vec<ShippingChoice>,
    pub discount_code: String,
    pub total: String,
}

impl SummaryView {
    /// The currently selected shipping choice.
    #[must_use]
    pub fn selected_shipping(&self) -> Option<&ShippingChoice> {
        self.shipping_choices.iter().find(|choice| choice.selected)
    }
}

/// One entry of the shipping selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShippingChoice {
    pub option: ShippingOption,
    /// e.g. `Express Delivery - $10.00`.
    pub caption: String,
    pub selected: bool,
}
