//! Error types for the Wikimedia REST client.
//!
//! # Design
//! Every operation surfaces the first failure it hits, unchanged. Transport
//! failures keep their own `TransportError` so callers can tell a refused
//! connection from a timeout. `NotFound` gets a dedicated variant because a
//! missing page title is the status callers most often branch on; every other
//! non-2xx response lands in `HttpStatus` with the raw body for debugging.

use crate::http::TransportError;

/// Errors returned by `WikimediaClient` and `EndpointResolver`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The host given at construction is not an absolute, base-capable URL.
    #[error("invalid host address {address:?}: {source}")]
    InvalidAddress {
        address: String,
        #[source]
        source: url::ParseError,
    },

    /// A relative endpoint path could not be resolved against the API root.
    #[error("invalid endpoint path {path:?}: {source}")]
    InvalidPath {
        path: String,
        #[source]
        source: url::ParseError,
    },

    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The server returned 404 for the resolved URL.
    #[error("resource not found: {url}")]
    NotFound { url: String },

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// The response body is not JSON or does not match the expected shape.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// A raw value does not name one of the on-this-day event types.
    #[error("unsupported event type: {0:?}")]
    InvalidEventType(String),
}
