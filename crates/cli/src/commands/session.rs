//! Replay a scripted shopping session.
//!
//! Loads a cart fixture into a store, then feeds each scripted intent to a
//! fresh page and prints the page after every step.
//!
//! # Usage
//!
//! ```bash
//! checkout session --cart cart.yaml --script session.yaml
//! ```

use std::path::Path;

use cart_checkout_core::{CartStore, PageIntent, PageView, ShoppingPage};
use tracing::info;

use super::{OutputFormat, print_view};
use crate::config::CheckoutConfig;
use crate::fixtures;
use crate::navigator::SessionNavigator;

/// Outcome of a replayed session.
#[derive(Debug)]
pub struct SessionReport {
    /// Page view before the first step, then one per step.
    pub views: Vec<PageView>,
    /// Routes the session navigated to.
    pub visited: Vec<&'static str>,
}

/// Load the fixtures, replay the script and print each page.
///
/// # Errors
///
/// Returns an error if configuration is invalid or either file cannot be
/// loaded.
pub fn run(
    config: &CheckoutConfig,
    cart_path: &Path,
    script_path: &Path,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let cart = fixtures::load_cart(cart_path)?;
    let script = fixtures::load_script(script_path)?;

    let mut store = CartStore::new(cart);
    let page = ShoppingPage::new(config.pricing_rules());
    let report = replay(page, &mut store, script);

    for view in &report.views {
        print_view(view, format)?;
    }
    info!(
        steps = report.views.len().saturating_sub(1),
        navigations = report.visited.len(),
        "Session complete"
    );
    Ok(())
}

/// Feed every intent to the page and collect the resulting views.
#[must_use]
pub fn replay(
    mut page: ShoppingPage,
    store: &mut CartStore,
    script: impl IntoIterator<Item = PageIntent>,
) -> SessionReport {
    let mut navigator = SessionNavigator::default();
    let mut views = vec![page.view(store.state())];

    for (step, intent) in script.into_iter().enumerate() {
        info!(step = step + 1, ?intent, "Handling intent");
        page.handle(intent, store, &mut navigator);
        views.push(page.view(store.state()));
    }

    SessionReport {
        views,
        visited: navigator.visited().to_vec(),
    }
}
