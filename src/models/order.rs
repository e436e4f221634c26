//! Order models for placing and listing orders.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{OperationType, OrderStatus, OrderType};
use super::money::MoneyAmount;
use super::primitives::{Figi, OrderId};

/// An active order, as listed by `GET /orders`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Order identifier
    pub order_id: OrderId,
    /// Instrument
    pub figi: Figi,
    /// Side
    pub operation: OperationType,
    /// Current status
    pub status: OrderStatus,
    /// Lots requested
    pub requested_lots: i64,
    /// Lots filled so far
    pub executed_lots: i64,
    /// Limit or market
    #[serde(rename = "type")]
    pub order_type: OrderType,
    /// Order price
    pub price: Decimal,
}

impl Order {
    /// Lots still waiting to be filled.
    pub fn remaining_lots(&self) -> i64 {
        self.requested_lots - self.executed_lots
    }
}

/// Result of `POST /orders/limit-order`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedLimitOrder {
    /// Identifier of the new order
    pub order_id: OrderId,
    /// Side
    pub operation: OperationType,
    /// Status right after placement
    pub status: OrderStatus,
    /// Why the order was rejected, if it was
    #[serde(default)]
    pub reject_reason: Option<String>,
    /// Extra message from the exchange
    #[serde(default)]
    pub message: Option<String>,
    /// Lots requested
    pub requested_lots: i64,
    /// Lots filled immediately
    pub executed_lots: i64,
    /// Commission charged
    #[serde(default)]
    pub commission: Option<MoneyAmount>,
}

/// Result of `POST /orders/market-order`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedMarketOrder {
    /// Identifier of the new order
    pub order_id: OrderId,
    /// Side
    pub operation: OperationType,
    /// Status right after placement
    pub status: OrderStatus,
    /// Why the order was rejected, if it was
    #[serde(default)]
    pub reject_reason: Option<String>,
    /// Extra message from the exchange
    #[serde(default)]
    pub message: Option<String>,
    /// Lots requested
    pub requested_lots: i64,
    /// Lots filled immediately
    pub executed_lots: i64,
    /// Commission charged
    #[serde(default)]
    pub commission: Option<MoneyAmount>,
}

/// JSON body of `POST /orders/limit-order`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LimitOrderRequest {
    /// Side
    pub operation: OperationType,
    /// Number of lots
    pub lots: i64,
    /// Limit price; sent as a JSON number
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

/// JSON body of `POST /orders/market-order`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketOrderRequest {
    /// Side
    pub operation: OperationType,
    /// Number of lots
    pub lots: i64,
}
