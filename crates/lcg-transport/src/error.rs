//! Error types for the generation transport
//!
//! The transport is the only fallible boundary in the system. Every variant
//! here maps to the transport-failure fallback on the caller's side; none of
//! them ever crosses into the pipeline core.

use thiserror::Error;

/// Errors from one generation request.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Request could not be sent or the connection failed
    #[error("request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Upstream answered with a non-success status.
    ///
    /// A non-2xx body is never passed through into validation, even when it
    /// happens to be text; it stays a transport failure.
    #[error("upstream error {status}: {body}")]
    UpstreamStatus {
        /// HTTP status code returned by the upstream API
        status: u16,
        /// Truncated upstream body, for diagnostics only
        body: String,
    },

    /// Response body did not decode as a chat-completions payload
    #[error("invalid response body: {0}")]
    InvalidBody(String),

    /// Response decoded but carried no message content
    #[error("response did not include message content")]
    MissingContent,
}
