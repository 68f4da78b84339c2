use std::time::Duration;

/// `User-Agent` sent when the caller does not set one.
pub const DEFAULT_USER_AGENT: &str = concat!("wikimedia-rest/", env!("CARGO_PKG_VERSION"));

/// Transport settings for `WikimediaClient::with_config`.
///
/// Wikimedia asks API clients to identify themselves, so set `user_agent`
/// to something with contact details for anything beyond local testing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub user_agent: String,
    /// Deadline for the whole round trip. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
