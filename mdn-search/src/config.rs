//! Search configuration with the MDN defaults.
//!
//! [`SearchConfig`] holds the API endpoint, the documentation base URL used
//! to build article links, and the locale to search in. It is constructed
//! once and passed by reference into the pipeline.

use crate::error::SearchError;
use url::Url;

/// MDN search API endpoint.
pub const API_URL: &str = "https://developer.mozilla.org/api/v1/search";

/// Base URL that document paths are resolved against.
pub const DOC_BASE_URL: &str = "https://developer.mozilla.org";

/// Locale searched when none is given.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Configuration for a documentation search.
///
/// Use [`Default::default()`] for the public MDN site, or override fields
/// to point at another deployment (or a mock server in tests).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Search API endpoint. Must be an absolute URL.
    pub api_url: String,
    /// Base URL for article links. Its path is replaced by each document's
    /// `mdn_url`.
    pub doc_base_url: String,
    /// Locale tag sent as the `locale` query parameter.
    pub locale: String,
    /// Custom User-Agent string. If `None`, identifies as `mdn-search/<version>`.
    pub user_agent: Option<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_url: API_URL.to_owned(),
            doc_base_url: DOC_BASE_URL.to_owned(),
            locale: DEFAULT_LOCALE.to_owned(),
            user_agent: None,
        }
    }
}

impl SearchConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `api_url` parses as an absolute URL
    /// - `doc_base_url` parses as an absolute URL that can carry a path
    /// - `locale` is not empty
    pub fn validate(&self) -> Result<(), SearchError> {
        self.api_endpoint()?;
        self.doc_base()?;
        if self.locale.trim().is_empty() {
            return Err(SearchError::Config("locale must not be empty".into()));
        }
        Ok(())
    }

    /// Parses [`SearchConfig::api_url`].
    pub fn api_endpoint(&self) -> Result<Url, SearchError> {
        Url::parse(&self.api_url)
            .map_err(|e| SearchError::Config(format!("invalid api_url `{}`: {e}", self.api_url)))
    }

    /// Parses [`SearchConfig::doc_base_url`].
    pub fn doc_base(&self) -> Result<Url, SearchError> {
        let url = Url::parse(&self.doc_base_url).map_err(|e| {
            SearchError::Config(format!("invalid doc_base_url `{}`: {e}", self.doc_base_url))
        })?;
        if url.cannot_be_a_base() {
            return Err(SearchError::Config(format!(
                "doc_base_url `{}` cannot carry a path",
                self.doc_base_url
            )));
        }
        Ok(url)
    }
}
