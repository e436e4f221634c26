//! Portfolio models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{Currency, InstrumentType};
use super::money::MoneyAmount;
use super::primitives::Figi;

/// A security position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioPosition {
    /// Instrument
    pub figi: Figi,
    /// Exchange ticker
    #[serde(default)]
    pub ticker: Option<String>,
    /// ISIN code
    #[serde(default)]
    pub isin: Option<String>,
    /// Kind of instrument
    pub instrument_type: InstrumentType,
    /// Units held
    pub balance: Decimal,
    /// Units reserved by active orders
    #[serde(default)]
    pub blocked: Option<Decimal>,
    /// Unrealised profit or loss
    #[serde(default)]
    pub expected_yield: Option<MoneyAmount>,
    /// Lots held
    pub lots: i64,
    /// Average entry price
    #[serde(default)]
    pub average_position_price: Option<MoneyAmount>,
    /// Average entry price without accrued coupon income (bonds)
    #[serde(default)]
    pub average_position_price_no_nkd: Option<MoneyAmount>,
    /// Display name
    pub name: String,
}

/// Payload of `GET /portfolio`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    /// Security positions
    pub positions: Vec<PortfolioPosition>,
}

/// A cash position in one currency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurrencyPosition {
    /// Currency
    pub currency: Currency,
    /// Amount held
    pub balance: Decimal,
    /// Amount reserved by active orders
    #[serde(default)]
    pub blocked: Option<Decimal>,
}

impl CurrencyPosition {
    /// Amount not reserved by active orders.
    pub fn available(&self) -> Decimal {
        self.balance - self.blocked.unwrap_or_default()
    }
}

/// Payload of `GET /portfolio/currencies`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Currencies {
    /// Cash positions
    pub currencies: Vec<CurrencyPosition>,
}
