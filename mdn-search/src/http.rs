//! Shared HTTP client for MDN API requests.
//!
//! Provides a configured [`reqwest::Client`] that identifies itself and
//! accepts compressed responses. No timeout is set here; the client's
//! defaults apply.

use crate::config::SearchConfig;
use crate::error::SearchError;

/// User-Agent sent when the config does not override it.
pub const DEFAULT_USER_AGENT: &str = concat!("mdn-search/", env!("CARGO_PKG_VERSION"));

/// Build a [`reqwest::Client`] for the search API.
///
/// The client has:
/// - The configured User-Agent, or [`DEFAULT_USER_AGENT`]
/// - Brotli and gzip decompression
/// - A bounded redirect policy
///
/// # Errors
///
/// Returns [`SearchError::Http`] if the client cannot be constructed.
pub fn build_client(config: &SearchConfig) -> Result<reqwest::Client, SearchError> {
    let ua = config.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT);

    reqwest::Client::builder()
        .user_agent(ua)
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| SearchError::Http(format!("failed to build HTTP client: {e}")))
}
