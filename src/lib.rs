//! # tinkoff-rs
//!
//! A typed async client for the Tinkoff Invest OpenAPI (REST v1).
//!
//! One [`BrokerClient`] holds the base URL and bearer token and exposes one
//! async method per endpoint. Each call sends a single HTTP request and
//! returns [`Result`]: transport failures, undecodable bodies and API errors
//! all arrive as [`Error`].
//!
//! ## Features
//!
//! - **Market**: stock, bond, ETF and currency listings
//! - **Operations**: account history between two instants
//! - **Orders**: active orders, limit/market placement, cancellation
//! - **Portfolio**: security and currency positions
//! - **Accounts**: broker accounts of the token owner
//!
//! The crate performs no retries, pagination or caching.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tinkoff_rs::{BrokerClient, ClientOptions, Environment};
//!
//! #[tokio::main]
//! async fn main() -> tinkoff_rs::Result<()> {
//!     let client = BrokerClient::new(ClientOptions::for_environment(
//!         Environment::Sandbox,
//!         std::env::var("TINKOFF_TOKEN").unwrap_or_default(),
//!     ))?;
//!
//!     for account in client.accounts().await? {
//!         let positions = client.portfolio(Some(&account.broker_account_id)).await?;
//!         println!("{}: {} positions", account.broker_account_id, positions.len());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Order Placement
//!
//! ```rust,no_run
//! use tinkoff_rs::BrokerClient;
//! use tinkoff_rs::api::PlaceLimitOrderOptions;
//! use tinkoff_rs::models::OperationType;
//! use rust_decimal_macros::dec;
//!
//! #[tokio::main]
//! async fn main() -> tinkoff_rs::Result<()> {
//!     let client = BrokerClient::from_env()?;
//!
//!     let order = PlaceLimitOrderOptions::new("BBG000B9XRY4", OperationType::Buy, 1, dec!(120.00));
//!     let placed = client.place_limit_order(&order).await?;
//!     println!("Order {} is {:?}", placed.order_id, placed.status);
//!
//!     client.cancel_order(&placed.order_id, None).await?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use client::{check_data, BrokerClient, ClientConfig, ClientOptions};
pub use error::{Error, Result};
pub use models::{BrokerAccountId, Environment, Figi, OrderId};

/// Prelude module for convenient imports.
///
/// ```rust
/// use tinkoff_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{OperationsOptions, PlaceLimitOrderOptions, PlaceMarketOrderOptions};
    pub use crate::client::{BrokerClient, ClientConfig, ClientOptions};
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        // Primitives
        BrokerAccountId, Environment, Figi, OrderId,
        // Enums
        BrokerAccountType, Currency, InstrumentType, OperationStatus, OperationType,
        OperationTypeWithCommission, OrderStatus, OrderType,
        // Entities
        CurrencyPosition, MarketInstrument, MoneyAmount, Operation, OperationTrade, Order,
        PlacedLimitOrder, PlacedMarketOrder, PortfolioPosition, UserAccount,
    };
}
