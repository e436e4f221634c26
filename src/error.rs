//! Error types for the brokerage API client.
//!
//! Every client call returns [`Result`]. Transport failures, undecodable
//! bodies and non-2xx responses all land in the same [`Error`] enum, so a
//! caller only ever matches on one type.

use thiserror::Error;

/// A specialized `Result` type for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed before a response was received
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// API answered with a non-2xx status and an error envelope
    #[error("[{code}] {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error code from the envelope payload
        code: String,
        /// Human-readable error message
        message: String,
        /// Tracking id of the failed request, if the server sent one
        tracking_id: Option<String>,
    },

    /// API answered with a non-2xx status and no usable body
    #[error("[{status}]")]
    Status {
        /// HTTP status code
        status: u16,
    },

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Invalid input provided to a function
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// HTTP status code carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } | Error::Status { status } => Some(*status),
            Error::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns `true` if the request never produced a usable response
    /// (connection refused, timeout, TLS failure, ...).
    ///
    /// The client itself never retries; this is a hint for callers.
    ///
    /// # Example
    ///
    /// ```
    /// use tinkoff_rs::Error;
    ///
    /// fn handle_error(err: Error) {
    ///     if err.is_transport_error() {
    ///         println!("Network problem, maybe try again later");
    ///     }
    /// }
    /// ```
    pub fn is_transport_error(&self) -> bool {
        matches!(self, Error::Http(_))
    }

    /// Returns `true` if the server rejected the bearer token.
    pub fn is_auth_error(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }

    /// Returns `true` if this error indicates a client-side issue
    /// (invalid input, bad request, etc.).
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::Api { status, .. } | Error::Status { status } => {
                (400..500).contains(status)
            }
            Error::InvalidInput(_) | Error::UrlParse(_) | Error::Config(_) => true,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a server-side issue.
    pub fn is_server_error(&self) -> bool {
        match self {
            Error::Api { status, .. } | Error::Status { status } => *status >= 500,
            _ => false,
        }
    }
}
