//! Client options and transport configuration.

use std::fmt;
use std::time::Duration;

use secrecy::SecretString;

use crate::{Environment, Error, Result};

/// Environment variable holding the API token.
pub const TOKEN_ENV: &str = "TINKOFF_TOKEN";
/// Environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "TINKOFF_BASE_URL";
/// Environment variable selecting the sandbox (`1` or `true`).
pub const SANDBOX_ENV: &str = "TINKOFF_SANDBOX";

/// Where to connect and which token to present.
///
/// # Example
///
/// ```
/// use tinkoff_rs::{ClientOptions, Environment};
///
/// let options = ClientOptions::for_environment(Environment::Sandbox, "t.my-token");
/// assert_eq!(options.base_url, "https://api-invest.tinkoff.ru/openapi/sandbox");
/// ```
#[derive(Clone)]
pub struct ClientOptions {
    /// Base URL every endpoint path is appended to
    pub base_url: String,
    /// Bearer token
    pub token: SecretString,
}

impl ClientOptions {
    /// Create options from an explicit base URL and token.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: SecretString::from(token.into()),
        }
    }

    /// Create options pointing at one of the public deployments.
    pub fn for_environment(env: Environment, token: impl Into<String>) -> Self {
        Self::new(env.api_base_url(), token)
    }

    /// Read options from the process environment.
    ///
    /// `TINKOFF_TOKEN` is required. `TINKOFF_BASE_URL` wins over
    /// `TINKOFF_SANDBOX`; with neither set the production URL is used.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let token = lookup(TOKEN_ENV)
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| Error::Config(format!("{} is not set", TOKEN_ENV)))?;

        let base_url = match lookup(BASE_URL_ENV) {
            Some(url) if !url.trim().is_empty() => url,
            _ => {
                let sandbox = lookup(SANDBOX_ENV)
                    .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true"))
                    .unwrap_or(false);
                let env = if sandbox {
                    Environment::Sandbox
                } else {
                    Environment::Production
                };
                env.api_base_url().to_string()
            }
        };

        Ok(Self::new(base_url, token))
    }
}

impl fmt::Debug for ClientOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientOptions")
            .field("base_url", &self.base_url)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

/// Transport settings for the HTTP client.
///
/// # Example
///
/// ```
/// use tinkoff_rs::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_timeout(Duration::from_secs(60))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout, enforced by the transport
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: format!("tinkoff-rs/{} (Rust)", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}
