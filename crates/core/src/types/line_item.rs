//! Cart line items.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::LineItemId;

/// Errors that can occur when constructing a [`LineItem`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LineItemError {
    /// The ID is empty.
    #[error("line item id cannot be empty")]
    EmptyId,
    /// The unit price is below zero.
    #[error("line item {id} has a negative price: {price}")]
    NegativePrice {
        /// Offending item.
        id: LineItemId,
        /// Price as supplied.
        price: Decimal,
    },
    /// The quantity is zero.
    #[error("line item {id} must have a quantity of at least 1")]
    ZeroQuantity {
        /// Offending item.
        id: LineItemId,
    },
}

/// A single product entry in the cart.
///
/// ## Constraints
///
/// - `id` is non-empty
/// - `price` is non-negative
/// - `quantity` is at least 1
///
/// Both [`LineItem::new`] and deserialization enforce these, so a `LineItem`
/// held anywhere in the crate is always valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawLineItem")]
pub struct LineItem {
    id: LineItemId,
    name: String,
    description: String,
    image: String,
    price: Decimal,
    quantity: u32,
}

/// Unvalidated wire form of a [`LineItem`].
#[derive(Deserialize)]
struct RawLineItem {
    id: LineItemId,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    image: String,
    price: Decimal,
    quantity: u32,
}

impl TryFrom<RawLineItem> for LineItem {
    type Error = LineItemError;

    fn try_from(raw: RawLineItem) -> Result<Self, Self::Error> {
        Self::new(raw.id, raw.name, raw.price, raw.quantity)
            .map(|item| item.with_description(raw.description).with_image(raw.image))
    }
}

impl LineItem {
    /// Create a validated line item with an empty description and image.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is empty, the price is negative, or the
    /// quantity is zero.
    pub fn new(
        id: impl Into<LineItemId>,
        name: impl Into<String>,
        price: Decimal,
        quantity: u32,
    ) -> Result<Self, LineItemError> {
        let id = id.into();
        if id.is_empty() {
            return Err(LineItemError::EmptyId);
        }
        if price.is_sign_negative() && !price.is_zero() {
            return Err(LineItemError::NegativePrice { id, price });
        }
        if quantity == 0 {
            return Err(LineItemError::ZeroQuantity { id });
        }

        Ok(Self {
            id,
            name: name.into(),
            description: String::new(),
            image: String::new(),
            price,
            quantity,
        })
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the image URL.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    #[must_use]
    pub const fn id(&self) -> &LineItemId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn image(&self) -> &str {
        &self.image
    }

    /// Unit price.
    #[must_use]
    pub const fn price(&self) -> Decimal {
        self.price
    }

    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// `price * quantity`, saturating at [`Decimal::MAX`].
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price.saturating_mul(Decimal::from(self.quantity))
    }

    /// Replace the quantity, keeping it at least 1.
    pub(crate) fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity.max(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn price(cents: i64) -> Decimal {
        Decimal::new(cents, 2)
    }

    #[test]
    fn test_new_valid() {
        let item = LineItem::new("sku-1", "Pineapple", price(1999), 2)
            .unwrap()
            .with_description("Fresh")
            .with_image("https://cdn.example.com/p.png");
        assert_eq!(item.id().as_str(), "sku-1");
        assert_eq!(item.name(), "Pineapple");
        assert_eq!(item.description(), "Fresh");
        assert_eq!(item.image(), "https://cdn.example.com/p.png");
        assert_eq!(item.quantity(), 2);
        assert_eq!(item.line_total(), price(3998));
    }

    #[test]
    fn test_free_item_is_allowed() {
        assert!(LineItem::new("gift", "Sticker", Decimal::ZERO, 1).is_ok());
    }

    #[test]
    fn test_rejects_empty_id() {
        assert_eq!(
            LineItem::new("", "Nothing", price(100), 1),
            Err(LineItemError::EmptyId)
        );
    }

    #[test]
    fn test_rejects_negative_price() {
        assert!(matches!(
            LineItem::new("sku-1", "Refund", price(-1), 1),
            Err(LineItemError::NegativePrice { .. })
        ));
    }

    #[test]
    fn test_rejects_zero_quantity() {
        assert!(matches!(
            LineItem::new("sku-1", "Ghost", price(100), 0),
            Err(LineItemError::ZeroQuantity { .. })
        ));
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: LineItem = serde_json::from_str(
            r#"{"id":"a","name":"A","description":"d","image":"/a.png","price":"19.99","quantity":2}"#,
        )
        .unwrap();
        assert_eq!(ok.price(), price(1999));

        let err = serde_json::from_str::<LineItem>(
            r#"{"id":"a","name":"A","price":"-1.00","quantity":2}"#,
        );
        assert!(err.is_err());

        let err = serde_json::from_str::<LineItem>(r#"{"id":"a","name":"A","price":"1","quantity":0}"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_set_quantity_floors_at_one() {
        let mut item = LineItem::new("sku-1", "A", price(100), 3).unwrap();
        item.set_quantity(0);
        assert_eq!(item.quantity(), 1);
    }
}
