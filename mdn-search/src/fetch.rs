//! Document fetching from the MDN search API.
//!
//! [`DocumentSource`] is the seam between the orchestrator and the network.
//! [`MdnClient`] is the HTTP implementation: one GET per call, a status
//! check, JSON parsing, then schema validation.

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::http;
use crate::query::SearchQuery;
use crate::types::SearchResponse;
use crate::validate::validate;
use hyper::ext::ReasonPhrase;
use reqwest::StatusCode;
use url::Url;

/// A source of validated search responses.
///
/// All implementations must be `Send + Sync`.
pub trait DocumentSource: Send + Sync {
    /// Fetch the documents matching `query.text` in `query.locale`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] if the request fails, the status is not a
    /// success, the body is not JSON, or the body fails validation.
    fn fetch_results(
        &self,
        query: &SearchQuery,
    ) -> impl std::future::Future<Output = Result<SearchResponse, SearchError>> + Send;
}

/// HTTP client for the MDN search API.
#[derive(Debug, Clone)]
pub struct MdnClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl MdnClient {
    /// Create a client for the endpoint in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if the config is invalid, or
    /// [`SearchError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &SearchConfig) -> Result<Self, SearchError> {
        config.validate()?;
        let client = http::build_client(config)?;
        Self::with_client(client, config)
    }

    /// Create a client around an existing [`reqwest::Client`].
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if `config.api_url` is not an absolute URL.
    pub fn with_client(
        client: reqwest::Client,
        config: &SearchConfig,
    ) -> Result<Self, SearchError> {
        Ok(Self {
            client,
            endpoint: config.api_endpoint()?,
        })
    }

    /// The search endpoint requests are sent to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl DocumentSource for MdnClient {
    async fn fetch_results(&self, query: &SearchQuery) -> Result<SearchResponse, SearchError> {
        let url = query.to_url(&self.endpoint);
        tracing::trace!(query = %query.text, locale = %query.locale, "MDN search");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SearchError::Http(format!("MDN request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "MDN API returned an error status");
            return Err(SearchError::Transport {
                status: status.as_u16(),
                status_text: status_text(status, response.extensions().get::<ReasonPhrase>()),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| SearchError::Http(format!("MDN response read failed: {e}")))?;

        tracing::trace!(bytes = body.len(), "MDN response received");

        parse_response(&body)
    }
}

/// The reason phrase for a failed response.
///
/// hyper only records a [`ReasonPhrase`] when the server sent something
/// other than the canonical phrase, so the canonical one is the fallback.
/// Unknown codes without a phrase give an empty string.
fn status_text(status: StatusCode, reason: Option<&ReasonPhrase>) -> String {
    reason
        .and_then(|r| std::str::from_utf8(r.as_bytes()).ok())
        .or_else(|| status.canonical_reason())
        .unwrap_or_default()
        .to_owned()
}

/// Parse and validate a raw response body.
///
/// Extracted as a separate function for testability without a server.
pub(crate) fn parse_response(body: &[u8]) -> Result<SearchResponse, SearchError> {
    let json: serde_json::Value = serde_json::from_slice(body)
        .map_err(|e| SearchError::Parse(format!("invalid JSON in MDN response: {e}")))?;

    validate(&json).map_err(|err| {
        tracing::warn!(
            violations = err.violations().len(),
            "MDN response failed schema validation"
        );
        SearchError::from(err)
    })
}
