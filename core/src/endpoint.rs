//! Resolution of relative endpoint paths against the REST API root.
//!
//! # Design
//! The resolver keeps one parsed `Url` whose path is forced to `API_ROOT`.
//! Callers hand in only a scheme and host (`https://en.wikipedia.org`); any
//! path they include is discarded. Relative paths are joined with standard
//! reference resolution, so a path with a leading `/` replaces the API root
//! instead of extending it. Endpoint builders in `paths` never emit one.

use url::Url;

use crate::error::Error;

/// Path every REST v1 endpoint lives under.
pub const API_ROOT: &str = "/api/rest_v1/";

/// Immutable base URL plus reference resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointResolver {
    base: Url,
}

impl EndpointResolver {
    pub fn new(host: &str) -> Result<Self, Error> {
        let invalid = |source| Error::InvalidAddress {
            address: host.to_string(),
            source,
        };

        let mut base = Url::parse(host).map_err(invalid)?;
        if base.cannot_be_a_base() {
            return Err(invalid(url::ParseError::RelativeUrlWithCannotBeABaseBase));
        }
        base.set_path(API_ROOT);

        Ok(Self { base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Resolve `relative` against the API root and return the absolute URL.
    pub fn resolve(&self, relative: &str) -> Result<String, Error> {
        self.base
            .join(relative)
            .map(String::from)
            .map_err(|source| Error::InvalidPath {
                path: relative.to_string(),
                source,
            })
    }
}
