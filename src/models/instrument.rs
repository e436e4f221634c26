//! Market instrument models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{Currency, InstrumentType};
use super::primitives::Figi;

/// A tradable instrument as listed by the `/market/*` endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketInstrument {
    /// Instrument identifier
    pub figi: Figi,
    /// Exchange ticker
    pub ticker: String,
    /// ISIN code
    #[serde(default)]
    pub isin: Option<String>,
    /// Minimal price step
    #[serde(default)]
    pub min_price_increment: Option<Decimal>,
    /// Number of units in one lot
    pub lot: i64,
    /// Trading currency
    #[serde(default)]
    pub currency: Option<Currency>,
    /// Display name
    pub name: String,
    /// Kind of instrument
    #[serde(rename = "type")]
    pub instrument_type: InstrumentType,
}

/// Payload of the `/market/*` listing endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketInstrumentList {
    /// Number of instruments in the list
    pub total: i64,
    /// The instruments
    pub instruments: Vec<MarketInstrument>,
}
