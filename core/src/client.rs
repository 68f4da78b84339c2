//! Blocking client for the Wikimedia REST v1 API.
//!
//! # Design
//! `WikimediaClient` holds an `EndpointResolver` and a `Transport` and carries
//! no mutable state between calls. Every operation is split the same way:
//! `build_request` turns a relative path into an `HttpRequest`, the transport
//! performs one GET, and `parse_response` checks the status and decodes the
//! body. `query` chains the three; the typed operations only choose the path
//! and the result type.

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::endpoint::EndpointResolver;
use crate::error::Error;
use crate::http::{HttpRequest, HttpResponse, Transport, UreqTransport};
use crate::paths;
use crate::types::{EventType, OnThisDayFeed, Summary, TitleRevisions};

/// Client bound to one Wikimedia project, e.g. `https://en.wikipedia.org`.
#[derive(Debug, Clone)]
pub struct WikimediaClient<T = UreqTransport> {
    resolver: EndpointResolver,
    transport: T,
}

impl WikimediaClient<UreqTransport> {
    pub fn new(host: &str) -> Result<Self, Error> {
        Self::with_config(host, &ClientConfig::default())
    }

    pub fn with_config(host: &str, config: &ClientConfig) -> Result<Self, Error> {
        Self::with_transport(host, UreqTransport::new(config))
    }
}

impl<T: Transport> WikimediaClient<T> {
    pub fn with_transport(host: &str, transport: T) -> Result<Self, Error> {
        let resolver = EndpointResolver::new(host)?;
        debug!(base = %resolver.base(), "wikimedia client ready");
        Ok(Self {
            resolver,
            transport,
        })
    }

    pub fn resolver(&self) -> &EndpointResolver {
        &self.resolver
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Resolve `relative_path` into a GET request against the API root.
    pub fn build_request(&self, relative_path: &str) -> Result<HttpRequest, Error> {
        Ok(HttpRequest {
            url: self.resolver.resolve(relative_path)?,
            headers: vec![("accept".to_string(), "application/json".to_string())],
        })
    }

    /// Check the status of `response` and decode its body as `R`.
    pub fn parse_response<R: DeserializeOwned>(
        &self,
        url: &str,
        response: HttpResponse,
    ) -> Result<R, Error> {
        let body = check_status(url, response)?;
        serde_json::from_slice(&body).map_err(Error::from)
    }

    /// GET `relative_path` and decode the response body as `R`.
    pub fn query<R: DeserializeOwned>(&self, relative_path: &str) -> Result<R, Error> {
        let request = self.build_request(relative_path)?;
        debug!(url = %request.url, "GET");
        let response = self.transport.execute(&request)?;
        debug!(
            status = response.status,
            bytes = response.body.len(),
            content_type = response.header("content-type").unwrap_or_default(),
            "response"
        );
        if response.is_json() == Some(false) {
            warn!(url = %request.url, "response is not declared as JSON");
        }
        self.parse_response(&request.url, response)
    }

    pub fn get_page_summary(&self, title: &str) -> Result<Summary, Error> {
        self.query(&paths::page_summary(title))
    }

    pub fn get_page_title(&self, title: &str) -> Result<TitleRevisions, Error> {
        self.query(&paths::page_title(title))
    }

    pub fn get_page_summary_random(&self) -> Result<Summary, Error> {
        self.query(&paths::page_summary_random())
    }

    pub fn get_page_title_random(&self) -> Result<TitleRevisions, Error> {
        self.query(&paths::page_title_random())
    }

    /// Events for `month`/`day`, filtered by `event_type`. The date is not
    /// validated locally.
    pub fn get_feed_on_this_day(
        &self,
        month: u32,
        day: u32,
        event_type: EventType,
    ) -> Result<OnThisDayFeed, Error> {
        self.query(&paths::feed_on_this_day(month, day, event_type))
    }
}

/// Return the body of a 2xx response, or map the status to an `Error`.
fn check_status(url: &str, response: HttpResponse) -> Result<Vec<u8>, Error> {
    if response.is_success() {
        return Ok(response.body);
    }
    warn!(status = response.status, %url, "non-success status");
    if response.status == 404 {
        return Err(Error::NotFound {
            url: url.to_string(),
        });
    }
    Err(Error::HttpStatus {
        status: response.status,
        body: String::from_utf8_lossy(&response.body).into_owned(),
    })
}
