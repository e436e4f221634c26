//! Money amounts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::Currency;

/// An amount of money in a given currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyAmount {
    /// Currency of the amount
    pub currency: Currency,
    /// Amount; negative for charges
    pub value: Decimal,
}

impl MoneyAmount {
    /// Create a new money amount.
    pub fn new(currency: Currency, value: Decimal) -> Self {
        Self { currency, value }
    }
}
