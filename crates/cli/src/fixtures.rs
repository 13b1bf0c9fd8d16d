//! Cart fixtures and session scripts.
//!
//! Both are read from disk and parsed by extension: `.json` files with
//! `serde_json`, everything else as YAML.
//!
//! A cart fixture is a list of line items:
//!
//! ```yaml
//! - id: sku-1
//!   name: Pineapple
//!   description: Whole fruit
//!   image: /img/pineapple.png
//!   price: "19.99"
//!   quantity: 2
//! ```
//!
//! A session script is a list of page intents:
//!
//! ```yaml
//! - intent: increment
//!   value: sku-1
//! - intent: select_shipping
//!   value: express
//! - intent: enter_discount_code
//!   value: DISCOUNT10
//! - intent: back_to_shop
//! ```

use std::path::{Path, PathBuf};

use cart_checkout_core::{CartState, PageIntent};
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors that can occur while loading a fixture file.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// File could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing failed.
    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// YAML parsing failed.
    #[error("invalid YAML in {}: {source}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Load a cart fixture. Line items are validated as they are parsed.
///
/// # Errors
///
/// Returns an error if the file cannot be read or any item is invalid.
pub fn load_cart(path: &Path) -> Result<CartState, FixtureError> {
    let cart: CartState = load(path)?;
    tracing::info!(
        path = %path.display(),
        lines = cart.items().len(),
        quantity = cart.total_quantity(),
        "Loaded cart"
    );
    Ok(cart)
}

/// Load a session script.
///
/// # Errors
///
/// Returns an error if the file cannot be read or an entry is not a known
/// intent.
pub fn load_script(path: &Path) -> Result<Vec<PageIntent>, FixtureError> {
    let intents: Vec<PageIntent> = load(path)?;
    tracing::info!(path = %path.display(), steps = intents.len(), "Loaded session script");
    Ok(intents)
}

fn load<T: DeserializeOwned>(path: &Path) -> Result<T, FixtureError> {
    let content = std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(path, &content)
}

fn parse<T: DeserializeOwned>(path: &Path, content: &str) -> Result<T, FixtureError> {
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        serde_json::from_str(content).map_err(|source| FixtureError::Json {
            path: path.to_path_buf(),
            source,
        })
    } else {
        serde_yaml::from_str(content).map_err(|source| FixtureError::Yaml {
            path: path.to_path_buf(),
            source,
        })
    }
}
