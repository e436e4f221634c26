//! HTTP client for the OpenAPI.
//!
//! This module provides the main entry point [`BrokerClient`] together with
//! its [`ClientOptions`] and [`ClientConfig`].
//!
//! # Example
//!
//! ```no_run
//! use tinkoff_rs::BrokerClient;
//!
//! # async fn example() -> tinkoff_rs::Result<()> {
//! // TINKOFF_TOKEN must be set
//! let client = BrokerClient::from_env()?;
//!
//! let accounts = client.accounts().await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod http;

pub use config::{ClientConfig, ClientOptions, BASE_URL_ENV, SANDBOX_ENV, TOKEN_ENV};
pub use http::{check_data, BrokerClient};
