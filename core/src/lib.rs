//! Blocking, typed client for the Wikimedia REST v1 API.
//!
//! # Overview
//! Turns typed calls such as `get_page_summary("Belgium")` into GET requests
//! under `/api/rest_v1/` on a caller-chosen host and decodes the JSON bodies
//! into the structures in `types`.
//!
//! # Design
//! - `EndpointResolver` is fixed at construction; `WikimediaClient` holds no
//!   other state, so one client can serve many threads.
//! - Each operation is `build_request` → `Transport::execute` →
//!   `parse_response`. The default transport is a pooled `ureq` agent; tests
//!   swap in their own `Transport`.
//! - Non-2xx responses are errors (`NotFound`, `HttpStatus`), never decoded.
//! - The library only emits `tracing` events. Installing a subscriber is up
//!   to the binary.
//!
//! ```no_run
//! use wikimedia_rest::{EventType, WikimediaClient};
//!
//! let client = WikimediaClient::new("https://en.wikipedia.org")?;
//! let summary = client.get_page_summary("Belgium")?;
//! println!("{}", summary.extract);
//!
//! let feed = client.get_feed_on_this_day(3, 22, EventType::Births)?;
//! println!("{} births", feed.births.unwrap_or_default().len());
//! # Ok::<(), wikimedia_rest::Error>(())
//! ```

pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod paths;
pub mod types;

pub use client::WikimediaClient;
pub use config::ClientConfig;
pub use endpoint::{EndpointResolver, API_ROOT};
pub use error::Error;
pub use http::{HttpRequest, HttpResponse, Transport, TransportError, UreqTransport};
pub use types::{
    ApiUrls, ContentUrl, ContentUrls, EventType, Image, OnThisDay, OnThisDayFeed, Summary, Title,
    TitleRevisions,
};
