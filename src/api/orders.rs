//! Order placement and management.

use rust_decimal::Decimal;
use serde::Serialize;

use super::AccountQuery;
use crate::models::{
    BrokerAccountId, Figi, LimitOrderRequest, MarketOrderRequest, OperationType, Order, OrderId,
    PlacedLimitOrder, PlacedMarketOrder,
};
use crate::{BrokerClient, Result};

/// Parameters for [`BrokerClient::place_limit_order`].
///
/// # Example
///
/// ```
/// use tinkoff_rs::api::PlaceLimitOrderOptions;
/// use tinkoff_rs::models::OperationType;
/// use rust_decimal_macros::dec;
///
/// let order = PlaceLimitOrderOptions::new("BBG000B9XRY4", OperationType::Buy, 1, dec!(120.50))
///     .with_account("2000123456");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceLimitOrderOptions {
    /// Instrument to trade
    pub figi: Figi,
    /// Number of lots
    pub lots: i64,
    /// Side
    pub operation: OperationType,
    /// Limit price
    pub price: Decimal,
    /// Broker account; the server's default account when `None`
    pub account: Option<BrokerAccountId>,
}

impl PlaceLimitOrderOptions {
    /// Create a limit order for the default account.
    pub fn new(figi: impl Into<Figi>, operation: OperationType, lots: i64, price: Decimal) -> Self {
        Self {
            figi: figi.into(),
            lots,
            operation,
            price,
            account: None,
        }
    }

    /// Place the order on a specific broker account.
    pub fn with_account(mut self, account: impl Into<BrokerAccountId>) -> Self {
        self.account = Some(account.into());
        self
    }
}

/// Parameters for [`BrokerClient::place_market_order`].
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceMarketOrderOptions {
    /// Instrument to trade
    pub figi: Figi,
    /// Number of lots
    pub lots: i64,
    /// Side
    pub operation: OperationType,
    /// Broker account; the server's default account when `None`
    pub account: Option<BrokerAccountId>,
}

impl PlaceMarketOrderOptions {
    /// Create a market order for the default account.
    pub fn new(figi: impl Into<Figi>, operation: OperationType, lots: i64) -> Self {
        Self {
            figi: figi.into(),
            lots,
            operation,
            account: None,
        }
    }

    /// Place the order on a specific broker account.
    pub fn with_account(mut self, account: impl Into<BrokerAccountId>) -> Self {
        self.account = Some(account.into());
        self
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FigiQuery<'a> {
    figi: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    broker_account_id: Option<&'a str>,
}

impl BrokerClient {
    /// List active orders.
    pub async fn active_orders(&self, account: Option<&BrokerAccountId>) -> Result<Vec<Order>> {
        self.inner
            .get_with_query("/orders", &AccountQuery::new(account))
            .await
    }

    /// Cancel an order.
    ///
    /// Resolves to `Ok(())` once the server accepts the cancellation.
    pub async fn cancel_order(
        &self,
        order_id: &OrderId,
        account: Option<&BrokerAccountId>,
    ) -> Result<()> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Query<'a> {
            order_id: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            broker_account_id: Option<&'a str>,
        }

        let query = Query {
            order_id: order_id.as_str(),
            broker_account_id: account.map(BrokerAccountId::as_str),
        };
        self.inner.post_empty("/orders/cancel", &query).await
    }

    /// Place a limit order.
    ///
    /// `figi` goes into the query string, `{operation, lots, price}` into the
    /// JSON body. A rejected order is still a successful call; inspect
    /// [`PlacedLimitOrder::status`] and `reject_reason`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use tinkoff_rs::api::PlaceLimitOrderOptions;
    /// use tinkoff_rs::models::OperationType;
    /// use rust_decimal_macros::dec;
    ///
    /// # async fn example(client: tinkoff_rs::BrokerClient) -> tinkoff_rs::Result<()> {
    /// let order = PlaceLimitOrderOptions::new("BBG000B9XRY4", OperationType::Buy, 1, dec!(120.50));
    /// let placed = client.place_limit_order(&order).await?;
    /// println!("Order {} is {:?}", placed.order_id, placed.status);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn place_limit_order(
        &self,
        options: &PlaceLimitOrderOptions,
    ) -> Result<PlacedLimitOrder> {
        let query = FigiQuery {
            figi: options.figi.as_str(),
            broker_account_id: options.account.as_ref().map(BrokerAccountId::as_str),
        };
        let body = LimitOrderRequest {
            operation: options.operation,
            lots: options.lots,
            price: options.price,
        };
        self.inner.post("/orders/limit-order", &query, &body).await
    }

    /// Place a market order.
    pub async fn place_market_order(
        &self,
        options: &PlaceMarketOrderOptions,
    ) -> Result<PlacedMarketOrder> {
        let query = FigiQuery {
            figi: options.figi.as_str(),
            broker_account_id: options.account.as_ref().map(BrokerAccountId::as_str),
        };
        let body = MarketOrderRequest {
            operation: options.operation,
            lots: options.lots,
        };
        self.inner.post("/orders/market-order", &query, &body).await
    }
}
