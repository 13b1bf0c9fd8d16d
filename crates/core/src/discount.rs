//! Discount code lookup.
//!
//! The calculator asks a [`DiscountLookup`] how much a code is worth and never
//! inspects the code itself.

use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;

/// The code accepted by [`SingleCodeDiscount::default`].
pub const DEFAULT_DISCOUNT_CODE: &str = "DISCOUNT10";

/// Resolves an entered discount code to a fixed amount off the order.
pub trait DiscountLookup: fmt::Debug {
    /// Amount to subtract for `code`, or zero if the code is not recognised.
    ///
    /// Implementations compare codes exactly: no trimming, no case folding.
    fn discount_for(&self, code: &str) -> Decimal;
}

/// Exactly one valid code worth a fixed amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleCodeDiscount {
    code: String,
    amount: Decimal,
}

impl SingleCodeDiscount {
    #[must_use]
    pub fn new(code: impl Into<String>, amount: Decimal) -> Self {
        Self {
            code: code.into(),
            amount,
        }
    }

    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }
}

impl Default for SingleCodeDiscount {
    /// `DISCOUNT10` for 10.00 off.
    fn default() -> Self {
        Self::new(DEFAULT_DISCOUNT_CODE, Decimal::from(10))
    }
}

impl DiscountLookup for SingleCodeDiscount {
    fn discount_for(&self, code: &str) -> Decimal {
        if code == self.code {
            self.amount
        } else {
            Decimal::ZERO
        }
    }
}

/// A set of codes, each with its own amount.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscountTable {
    codes: BTreeMap<String, Decimal>,
}

impl DiscountTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a code.
    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>, amount: Decimal) -> Self {
        self.codes.insert(code.into(), amount);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl FromIterator<(String, Decimal)> for DiscountTable {
    fn from_iter<I: IntoIterator<Item = (String, Decimal)>>(iter: I) -> Self {
        Self {
            codes: iter.into_iter().collect(),
        }
    }
}

impl DiscountLookup for DiscountTable {
    fn discount_for(&self, code: &str) -> Decimal {
        self.codes.get(code).copied().unwrap_or(Decimal::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_code() {
        let lookup = SingleCodeDiscount::default();
        assert_eq!(lookup.discount_for("DISCOUNT10"), Decimal::from(10));
    }

    #[test]
    fn test_default_code_is_exact_match() {
        let lookup = SingleCodeDiscount::default();
        assert_eq!(lookup.discount_for("discount10"), Decimal::ZERO);
        assert_eq!(lookup.discount_for(" DISCOUNT10"), Decimal::ZERO);
        assert_eq!(lookup.discount_for("DISCOUNT10 "), Decimal::ZERO);
        assert_eq!(lookup.discount_for(""), Decimal::ZERO);
    }

    #[test]
    fn test_table_lookup() {
        let table = DiscountTable::new()
            .with_code("SPRING5", Decimal::from(5))
            .with_code("DISCOUNT10", Decimal::from(10));
        assert_eq!(table.len(), 2);
        assert_eq!(table.discount_for("SPRING5"), Decimal::from(5));
        assert_eq!(table.discount_for("DISCOUNT10"), Decimal::from(10));
        assert_eq!(table.discount_for("WINTER"), Decimal::ZERO);
    }

    #[test]
    fn test_empty_table_never_discounts() {
        let table = DiscountTable::new();
        assert!(table.is_empty());
        assert_eq!(table.discount_for("DISCOUNT10"), Decimal::ZERO);
    }
}
