//! Identifier newtypes and the API environment.
//!
//! The API identifies instruments, orders and broker accounts by plain
//! strings. Wrapping them keeps a FIGI from being passed where an order id
//! is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Financial Instrument Global Identifier.
///
/// # Example
///
/// ```
/// use tinkoff_rs::Figi;
///
/// let figi = Figi::new("BBG000B9XRY4");
/// assert_eq!(figi.as_str(), "BBG000B9XRY4");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Figi(String);

impl Figi {
    /// Create a new FIGI.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the FIGI as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Figi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Figi {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for Figi {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Figi {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Server-assigned order identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    /// Create a new order ID.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the order ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for OrderId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for OrderId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for OrderId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Broker account identifier, as returned by `/user/accounts`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BrokerAccountId(String);

impl BrokerAccountId {
    /// Create a new broker account ID.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the broker account ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BrokerAccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for BrokerAccountId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for BrokerAccountId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for BrokerAccountId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Which deployment of the OpenAPI to talk to.
///
/// # Example
///
/// ```
/// use tinkoff_rs::Environment;
///
/// let env = Environment::Sandbox;
/// println!("API URL: {}", env.api_base_url());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Real trading with real money.
    #[default]
    Production,
    /// Sandbox with virtual balances.
    Sandbox,
}

impl Environment {
    /// Get the base URL for REST API requests.
    pub fn api_base_url(&self) -> &'static str {
        match self {
            Environment::Production => "https://api-invest.tinkoff.ru/openapi",
            Environment::Sandbox => "https://api-invest.tinkoff.ru/openapi/sandbox",
        }
    }

    /// Returns `true` if this is the sandbox environment.
    pub fn is_sandbox(&self) -> bool {
        matches!(self, Environment::Sandbox)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Production => write!(f, "production"),
            Environment::Sandbox => write!(f, "sandbox"),
        }
    }
}
