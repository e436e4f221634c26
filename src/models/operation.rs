//! Account operation (transaction history) models.

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{Currency, InstrumentType, OperationStatus, OperationTypeWithCommission};
use super::money::MoneyAmount;
use super::primitives::Figi;

/// A single fill belonging to an operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationTrade {
    /// Trade identifier
    pub trade_id: String,
    /// Execution time
    pub date: DateTime<FixedOffset>,
    /// Execution price
    pub price: Decimal,
    /// Executed quantity, in units
    pub quantity: i64,
}

/// An account operation: a trade, fee, cash movement, coupon, etc.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    /// Operation identifier
    pub id: String,
    /// Settlement status
    pub status: OperationStatus,
    /// Fills, for trade operations
    #[serde(default)]
    pub trades: Option<Vec<OperationTrade>>,
    /// Commission charged
    #[serde(default)]
    pub commission: Option<MoneyAmount>,
    /// Currency of `payment`
    pub currency: Currency,
    /// Cash effect on the account
    pub payment: Decimal,
    /// Average price, for trade operations
    #[serde(default)]
    pub price: Option<Decimal>,
    /// Quantity, for trade operations
    #[serde(default)]
    pub quantity: Option<i64>,
    /// Instrument, if the operation concerns one
    #[serde(default)]
    pub figi: Option<Figi>,
    /// Kind of instrument
    #[serde(default)]
    pub instrument_type: Option<InstrumentType>,
    /// Whether the operation was a margin call
    pub is_margin_call: bool,
    /// When the operation happened
    pub date: DateTime<FixedOffset>,
    /// Kind of operation
    #[serde(default)]
    pub operation_type: Option<OperationTypeWithCommission>,
}

/// Payload of `GET /operations`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Operations {
    /// Operations in the requested interval
    pub operations: Vec<Operation>,
}
