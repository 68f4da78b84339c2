//! HTTP transport types and the blocking `ureq` transport.
//!
//! # Design
//! Requests and responses are described as plain owned data. The client
//! builds an `HttpRequest`, hands it to a `Transport`, and parses the
//! `HttpResponse` it gets back. Status codes are returned as data, never as
//! transport errors, so status interpretation stays in the client.
//!
//! `UreqTransport` owns a single `ureq::Agent`; the agent pools connections
//! and is safe to share between threads, so one transport serves any number
//! of concurrent callers.

use tracing::{trace, warn};

use crate::config::ClientConfig;

/// A GET request described as plain data.
///
/// Built by `WikimediaClient::build_request`. Only GET is ever issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    /// Raw body bytes. Decoding, UTF-8 included, happens in the client.
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// First value of header `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Whether the declared content type is JSON (`application/json` or a
    /// `+json` suffix type). `None` when the header is missing.
    pub fn is_json(&self) -> Option<bool> {
        let content_type = self.header("content-type")?;
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        Some(essence == "application/json" || essence.ends_with("+json"))
    }
}

/// Failure to complete the HTTP round trip at all.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("request timed out: {0}")]
    Timeout(String),

    /// DNS, connect, TLS or protocol failure before a response arrived.
    #[error("connection failed: {0}")]
    Connection(String),

    #[error("failed to read response body: {0}")]
    Body(String),
}

/// Executes one blocking round trip.
pub trait Transport: Send + Sync {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Default transport backed by a pooled `ureq::Agent`.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
    user_agent: String,
}

impl UreqTransport {
    pub fn new(config: &ClientConfig) -> Self {
        // Status codes are data for the client to interpret.
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(config.timeout)
            .build()
            .new_agent();

        Self {
            agent,
            user_agent: config.user_agent.clone(),
        }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new(&ClientConfig::default())
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = self
            .agent
            .get(&request.url)
            .header("user-agent", self.user_agent.as_str());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let mut response = builder.call().map_err(|err| {
            warn!(url = %request.url, error = %err, "transport failure");
            TransportError::from(err)
        })?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    value.to_str().unwrap_or_default().to_string(),
                )
            })
            .collect();
        let body = response.body_mut().read_to_vec().map_err(|err| {
            warn!(url = %request.url, error = %err, "failed reading body");
            TransportError::from_body_error(err)
        })?;

        trace!(status, bytes = body.len(), "response received");
        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

fn is_timeout(err: &ureq::Error) -> bool {
    match err {
        ureq::Error::Timeout(_) => true,
        ureq::Error::Io(io) => io.kind() == std::io::ErrorKind::TimedOut,
        _ => false,
    }
}

impl TransportError {
    /// Map a failure while reading the body. The global deadline can expire
    /// mid-body, which is still a timeout.
    fn from_body_error(err: ureq::Error) -> Self {
        if is_timeout(&err) {
            TransportError::Timeout(err.to_string())
        } else {
            TransportError::Body(err.to_string())
        }
    }
}

impl From<ureq::Error> for TransportError {
    fn from(err: ureq::Error) -> Self {
        if is_timeout(&err) {
            TransportError::Timeout(err.to_string())
        } else {
            TransportError::Connection(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    fn with_content_type(value: &str) -> HttpResponse {
        HttpResponse {
            headers: vec![("Content-Type".to_string(), value.to_string())],
            ..response(200)
        }
    }

    #[test]
    fn success_covers_the_2xx_range_only() {
        assert!(response(200).is_success());
        assert!(response(204).is_success());
        assert!(response(299).is_success());
        assert!(!response(199).is_success());
        assert!(!response(301).is_success());
        assert!(!response(404).is_success());
        assert!(!response(503).is_success());
    }

    #[test]
    fn header_lookup_ignores_case() {
        let resp = with_content_type("application/json");
        assert_eq!(resp.header("content-type"), Some("application/json"));
        assert_eq!(resp.header("CONTENT-TYPE"), Some("application/json"));
        assert_eq!(resp.header("etag"), None);
    }

    #[test]
    fn json_content_types_are_recognised() {
        assert_eq!(with_content_type("application/json").is_json(), Some(true));
        assert_eq!(
            with_content_type(
                "application/json; charset=utf-8; profile=\"https://www.mediawiki.org/wiki/Specs/Summary/1.4.2\""
            )
            .is_json(),
            Some(true)
        );
        assert_eq!(with_content_type("application/problem+json").is_json(), Some(true));
        assert_eq!(with_content_type("text/html; charset=utf-8").is_json(), Some(false));
        assert_eq!(response(200).is_json(), None);
    }

    #[test]
    fn transport_errors_display_their_kind() {
        let err = TransportError::Connection("refused".to_string());
        assert_eq!(err.to_string(), "connection failed: refused");
        let err = TransportError::Timeout("global".to_string());
        assert_eq!(err.to_string(), "request timed out: global");
    }

    #[test]
    fn body_read_deadline_maps_to_timeout() {
        let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "deadline");
        let err = TransportError::from_body_error(ureq::Error::Io(io));
        assert!(matches!(err, TransportError::Timeout(_)), "{err:?}");

        let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset");
        let err = TransportError::from_body_error(ureq::Error::Io(io));
        assert!(matches!(err, TransportError::Body(_)), "{err:?}");
    }

    #[test]
    fn ureq_transport_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<UreqTransport>();
    }
}
