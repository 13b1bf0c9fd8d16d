//! Delivery tiers offered on the shopping page.

use core::fmt;
use core::str::FromStr;
use std::convert::Infallible;

use serde::{Deserialize, Serialize};

/// A named delivery tier with an associated fixed cost.
///
/// Costs live in [`crate::pricing::ShippingRates`]; this type only names the
/// tier.
///
/// Serializes as its snake_case name. Deserializes from any string through
/// [`ShippingOption::from_label`], so unrecognised text becomes Standard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum ShippingOption {
    #[default]
    StandardDelivery,
    ExpressDelivery,
}

impl ShippingOption {
    /// Every tier in the order the page lists them.
    pub const ALL: [Self; 2] = [Self::StandardDelivery, Self::ExpressDelivery];

    /// Human-readable tier name.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::StandardDelivery => "Standard Delivery",
            Self::ExpressDelivery => "Express Delivery",
        }
    }

    /// Short key used on the command line and in scripts.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::StandardDelivery => "standard",
            Self::ExpressDelivery => "express",
        }
    }

    /// Resolve free text to a tier.
    ///
    /// Express is chosen for its key (`express`), its serialized name
    /// (`express_delivery`), its label (`Express Delivery`), or a selector
    /// caption that starts with the label followed by ` - `
    /// (`Express Delivery - $10.00`). Everything else, including the empty
    /// string, is Standard.
    #[must_use]
    pub fn from_label(text: &str) -> Self {
        let express = Self::ExpressDelivery;
        let is_express = text == express.key()
            || text == "express_delivery"
            || text == express.label()
            || text
                .strip_prefix(express.label())
                .is_some_and(|rest| rest.starts_with(" - "));

        if is_express {
            Self::ExpressDelivery
        } else {
            Self::StandardDelivery
        }
    }
}

impl fmt::Display for ShippingOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for ShippingOption {
    fn from(text: String) -> Self {
        Self::from_label(&text)
    }
}

impl FromStr for ShippingOption {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_label(s))
    }
}
