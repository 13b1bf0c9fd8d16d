//! Checkout configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `CHECKOUT_CURRENCY` - ISO 4217 code used for display (default: USD)
//! - `CHECKOUT_STANDARD_SHIPPING` - Standard delivery cost (default: 5.00)
//! - `CHECKOUT_EXPRESS_SHIPPING` - Express delivery cost (default: 10.00)
//! - `CHECKOUT_DISCOUNT_CODES` - Comma-separated `CODE=AMOUNT` pairs
//!   (default: `DISCOUNT10=10.00`; empty disables discounts)
//! - `CHECKOUT_CLAMP_TOTAL` - Never show a total below zero (default: false)

use std::str::FromStr;

use cart_checkout_core::{
    CurrencyCode, DiscountTable, PricingRules, ShippingRates, SingleCodeDiscount, TotalPolicy,
};
use rust_decimal::Decimal;
use thiserror::Error;

const DEFAULT_DISCOUNT_CODES: &str = "DISCOUNT10=10.00";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Pricing configuration for the checkout page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutConfig {
    /// Currency used when formatting prices
    pub currency: CurrencyCode,
    /// Cost of each delivery tier
    pub shipping: ShippingRates,
    /// Accepted discount codes and their amounts, in configured order
    pub discount_codes: Vec<(String, Decimal)>,
    /// Whether totals are clamped at zero
    pub clamp_total: bool,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        let discount = SingleCodeDiscount::default();
        Self {
            currency: CurrencyCode::default(),
            shipping: ShippingRates::default(),
            discount_codes: vec![(discount.code().to_owned(), discount.amount())],
            clamp_total: false,
        }
    }
}

impl CheckoutConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to a value that cannot be
    /// parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to a value that cannot be
    /// parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = ShippingRates::default();

        let currency = match lookup("CHECKOUT_CURRENCY") {
            Some(value) => CurrencyCode::from_str(value.trim())
                .map_err(|e| ConfigError::InvalidEnvVar("CHECKOUT_CURRENCY".to_string(), e))?,
            None => CurrencyCode::default(),
        };
        let standard = get_amount(&lookup, "CHECKOUT_STANDARD_SHIPPING", defaults.standard)?;
        let express = get_amount(&lookup, "CHECKOUT_EXPRESS_SHIPPING", defaults.express)?;
        let discount_codes = parse_discount_codes(
            &lookup("CHECKOUT_DISCOUNT_CODES").unwrap_or_else(|| DEFAULT_DISCOUNT_CODES.to_string()),
        )?;
        let clamp_total = match lookup("CHECKOUT_CLAMP_TOTAL") {
            Some(value) => parse_bool("CHECKOUT_CLAMP_TOTAL", &value)?,
            None => false,
        };

        Ok(Self {
            currency,
            shipping: ShippingRates::new(standard, express),
            discount_codes,
            clamp_total,
        })
    }

    /// Build the pricing rules the page uses.
    ///
    /// One configured code becomes a [`SingleCodeDiscount`]; any other number
    /// becomes a [`DiscountTable`].
    #[must_use]
    pub fn pricing_rules(&self) -> PricingRules {
        let rules = PricingRules::default()
            .with_currency(self.currency)
            .with_shipping(self.shipping)
            .with_total_policy(if self.clamp_total {
                TotalPolicy::ClampAtZero
            } else {
                TotalPolicy::AllowNegative
            });

        match self.discount_codes.as_slice() {
            [(code, amount)] => rules.with_discounts(SingleCodeDiscount::new(code.clone(), *amount)),
            codes => rules.with_discounts(codes.iter().cloned().collect::<DiscountTable>()),
        }
    }
}

fn get_amount(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: Decimal,
) -> Result<Decimal, ConfigError> {
    let Some(value) = lookup(key) else {
        return Ok(default);
    };
    parse_amount(key, value.trim())
}

fn parse_amount(key: &str, value: &str) -> Result<Decimal, ConfigError> {
    let amount = Decimal::from_str(value)
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("amount cannot be negative: {value}"),
        ));
    }
    Ok(amount)
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("expected a boolean, got {other:?}"),
        )),
    }
}

/// Parse `CODE=AMOUNT` pairs separated by commas.
///
/// Whitespace around pairs is ignored; codes themselves are kept verbatim.
fn parse_discount_codes(value: &str) -> Result<Vec<(String, Decimal)>, ConfigError> {
    const KEY: &str = "CHECKOUT_DISCOUNT_CODES";

    value
        .split(',')
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (code, amount) = pair.split_once('=').ok_or_else(|| {
                ConfigError::InvalidEnvVar(KEY.to_string(), format!("expected CODE=AMOUNT, got {pair:?}"))
            })?;
            let code = code.trim();
            if code.is_empty() {
                return Err(ConfigError::InvalidEnvVar(
                    KEY.to_string(),
                    format!("empty discount code in {pair:?}"),
                ));
            }
            Ok((code.to_string(), parse_amount(KEY, amount.trim())?))
        })
        .collect()
}
