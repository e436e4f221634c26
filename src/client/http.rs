//! HTTP client implementation for the OpenAPI.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Method, RequestBuilder};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::models::{ErrorResponse, Response};
use crate::{Error, Result};

use super::config::{ClientConfig, ClientOptions};

/// The client for the brokerage OpenAPI.
///
/// Construction only prepares the HTTP transport; no request is sent until an
/// endpoint method is called. Every endpoint method issues exactly one
/// request and returns [`crate::Result`].
///
/// The client is cheap to clone and can be shared between tasks; it keeps no
/// mutable state between calls.
///
/// # Example
///
/// ```no_run
/// use tinkoff_rs::{BrokerClient, ClientOptions, Environment};
///
/// # async fn example() -> tinkoff_rs::Result<()> {
/// let client = BrokerClient::new(ClientOptions::for_environment(
///     Environment::Sandbox,
///     "t.my-token",
/// ))?;
///
/// let stocks = client.stocks().await?;
/// println!("{} stocks", stocks.len());
/// # Ok(())
/// # }
/// ```
pub struct BrokerClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) config: ClientConfig,
}

impl BrokerClient {
    /// Create a client with default transport settings.
    pub fn new(options: ClientOptions) -> Result<Self> {
        Self::with_config(options, ClientConfig::default())
    }

    /// Create a client with custom transport settings.
    pub fn with_config(options: ClientOptions, config: ClientConfig) -> Result<Self> {
        let base_url = Url::parse(&options.base_url)?;

        let mut auth = HeaderValue::from_str(&format!(
            "Bearer {}",
            options.token.expose_secret()
        ))
        .map_err(|_| Error::InvalidInput("Invalid token format".to_string()))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                base_url: base_url.as_str().trim_end_matches('/').to_string(),
                config,
            }),
        })
    }

    /// Create a client from `TINKOFF_*` environment variables.
    ///
    /// See [`ClientOptions::from_env`].
    pub fn from_env() -> Result<Self> {
        Self::new(ClientOptions::from_env()?)
    }

    /// Base URL that endpoint paths are appended to.
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Transport settings this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }
}

impl ClientInner {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Make a GET request and return the envelope payload.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let request = self.http.get(self.url(path));
        let data = self.execute(Method::GET, path, request).await?;
        extract_payload(data)
    }

    /// Make a GET request with query parameters and return the envelope payload.
    pub(crate) async fn get_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T> {
        let request = self.http.get(self.url(path)).query(query);
        let data = self.execute(Method::GET, path, request).await?;
        extract_payload(data)
    }

    /// Make a POST request with query parameters and a JSON body.
    pub(crate) async fn post<T: DeserializeOwned, Q: Serialize + ?Sized, B: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
        body: &B,
    ) -> Result<T> {
        let request = self.http.post(self.url(path)).query(query).json(body);
        let data = self.execute(Method::POST, path, request).await?;
        extract_payload(data)
    }

    /// Make a bodiless POST request whose payload carries nothing of interest.
    pub(crate) async fn post_empty<Q: Serialize + ?Sized>(&self, path: &str, query: &Q) -> Result<()> {
        let request = self.http.post(self.url(path)).query(query);
        self.execute(Method::POST, path, request).await?;
        Ok(())
    }

    /// Send a request and run the outcome through [`check_data`].
    async fn execute(
        &self,
        method: Method,
        path: &str,
        request: RequestBuilder,
    ) -> Result<Option<Value>> {
        debug!("{} {}", method, path);

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        debug!("{} {} -> {}", method, path, status);

        let data = if bytes.is_empty() {
            None
        } else {
            match serde_json::from_slice::<Value>(&bytes) {
                Ok(value) => Some(value),
                Err(err) if status.is_success() => return Err(err.into()),
                // Non-JSON error bodies (proxy pages etc.) fall back to the bare status
                Err(_) => None,
            }
        };

        let checked = check_data(status.as_u16(), data);
        if let Err(err) = &checked {
            warn!("{} {} failed: {}", method, path, err);
        }
        checked
    }
}

/// Validate a response status and pass the decoded body through.
///
/// - status in `[200, 300)`: the body is returned unchanged;
/// - otherwise, with a body that decodes as an error envelope:
///   [`Error::Api`], displayed as `[<code>] <message>`;
/// - otherwise: [`Error::Status`], displayed as `[<status>]`.
///
/// # Example
///
/// ```
/// use tinkoff_rs::check_data;
/// use serde_json::json;
///
/// let body = json!({
///     "trackingId": "abc",
///     "payload": {"message": "Unknown figi", "code": "NOT_FOUND"},
///     "status": "Error"
/// });
/// let err = check_data(404, Some(body)).unwrap_err();
/// assert_eq!(err.to_string(), "[NOT_FOUND] Unknown figi");
///
/// assert_eq!(check_data(500, None).unwrap_err().to_string(), "[500]");
/// ```
pub fn check_data(status: u16, data: Option<Value>) -> Result<Option<Value>> {
    if (200..300).contains(&status) {
        return Ok(data);
    }

    if let Some(body) = data {
        if let Ok(envelope) = serde_json::from_value::<ErrorResponse>(body) {
            return Err(Error::Api {
                status,
                code: envelope.payload.code,
                message: envelope.payload.message,
                tracking_id: envelope.tracking_id,
            });
        }
    }

    Err(Error::Status { status })
}

/// Decode a success envelope and return its payload.
fn extract_payload<T: DeserializeOwned>(data: Option<Value>) -> Result<T> {
    let body = data.ok_or_else(|| {
        <serde_json::Error as serde::de::Error>::custom("empty response body")
    })?;
    let envelope: Response<T> = serde_json::from_value(body)?;
    Ok(envelope.payload)
}

impl Clone for BrokerClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for BrokerClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrokerClient")
            .field("base_url", &self.inner.base_url)
            .field("config", &self.inner.config)
            .finish()
    }
}
