//! Show the cart page for a fixture.
//!
//! # Usage
//!
//! ```bash
//! checkout show --cart cart.yaml
//! checkout show --cart cart.json --shipping express --discount DISCOUNT10
//! ```

use std::path::Path;

use cart_checkout_core::{ShippingOption, ShoppingPage};
use tracing::info;

use super::{OutputFormat, format_view};
use crate::config::CheckoutConfig;
use crate::fixtures;

/// Print the page for a cart fixture with the given shipping tier and code.
///
/// # Errors
///
/// Returns an error if the fixture cannot be loaded or the page cannot be
/// rendered.
pub fn run(
    config: &CheckoutConfig,
    cart_path: &Path,
    shipping: &str,
    discount: &str,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = render(config, cart_path, shipping, discount, format)?;

    #[allow(clippy::print_stdout)]
    {
        println!("{output}");
    }
    Ok(())
}

/// Render the page for a cart fixture without printing it.
///
/// # Errors
///
/// Returns an error if the fixture cannot be loaded or the page cannot be
/// rendered.
pub fn render(
    config: &CheckoutConfig,
    cart_path: &Path,
    shipping: &str,
    discount: &str,
    format: OutputFormat,
) -> Result<String, Box<dyn std::error::Error>> {
    let cart = fixtures::load_cart(cart_path)?;

    let mut page = ShoppingPage::new(config.pricing_rules());
    page.select_shipping(ShippingOption::from_label(shipping));
    page.enter_discount_code(discount);

    info!(shipping = %page.shipping_option(), "Rendering cart page");
    format_view(&page.view(&cart), format)
}
