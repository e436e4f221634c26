//! Endpoint methods of [`BrokerClient`](crate::BrokerClient).
//!
//! Each submodule adds one `impl BrokerClient` block for a subset of the
//! OpenAPI:
//!
//! - `market` - instrument listings
//! - `operations` - account operation history
//! - `orders` - active orders, placement and cancellation
//! - `user` - broker accounts
//! - `portfolio` - security and currency positions

use serde::Serialize;

use crate::models::BrokerAccountId;

mod market;
mod operations;
mod orders;
mod portfolio;
mod user;

pub use operations::OperationsOptions;
pub use orders::{PlaceLimitOrderOptions, PlaceMarketOrderOptions};

/// Query for endpoints that only accept an optional `brokerAccountId`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AccountQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub broker_account_id: Option<&'a str>,
}

impl<'a> AccountQuery<'a> {
    pub(crate) fn new(account: Option<&'a BrokerAccountId>) -> Self {
        Self {
            broker_account_id: account.map(BrokerAccountId::as_str),
        }
    }
}
