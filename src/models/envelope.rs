//! Response envelope shared by every endpoint.
//!
//! ```json
//! { "trackingId": "...", "payload": { ... }, "status": "OK" }
//! { "trackingId": "...", "payload": { "message": "...", "code": "..." }, "status": "Error" }
//! ```

use serde::{Deserialize, Serialize};

/// Value of the envelope's `status` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnvelopeStatus {
    /// Request succeeded
    #[serde(rename = "OK")]
    Ok,
    /// Request failed; payload is an [`ErrorPayload`]
    Error,
}

/// Success envelope wrapping an endpoint-specific payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response<T> {
    /// Server-side id of the request, useful when contacting support
    pub tracking_id: String,
    /// Endpoint payload
    pub payload: T,
    /// Always [`EnvelopeStatus::Ok`] for a 2xx response
    pub status: EnvelopeStatus,
}

/// Failure envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Server-side id of the failed request
    #[serde(default)]
    pub tracking_id: Option<String>,
    /// Error details
    pub payload: ErrorPayload,
    /// [`EnvelopeStatus::Error`] when the server sends it
    #[serde(default)]
    pub status: Option<EnvelopeStatus>,
}

/// Body of a failure envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorPayload {
    /// Human-readable message
    pub message: String,
    /// Machine-readable error code
    pub code: String,
}
