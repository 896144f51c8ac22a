use std::time::Duration;

/// Default `InnerTube` host
pub const DEFAULT_BASE_URL: &str = "https://www.youtube.com";

/// Default timeout for upstream requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Connection settings for the `InnerTube` client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InnertubeConfig {
    /// Scheme and host of the API, without a trailing slash
    pub base_url: String,
    /// Interface language. Falls back to the session's language when unset
    pub hl: Option<String>,
    /// Content region. Falls back to the session's region when unset
    pub gl: Option<String>,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for InnertubeConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            hl: None,
            gl: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}
