//! # mdn-search
//!
//! Query the MDN documentation search API and turn the hits into
//! launcher result items.
//!
//! ## Design
//!
//! - One GET per search to `https://developer.mozilla.org/api/v1/search`
//! - The response is validated field by field; a single mismatch rejects it
//!   and every violation is reported
//! - Each document becomes a [`ResultItem`] with an absolute article URL
//!   and a trimmed summary, in the order the API returned them
//! - No caching, pagination, retries, or concurrency
//!
//! Search queries are logged only at trace level.

pub mod config;
pub mod error;
pub mod fetch;
pub mod format;
pub mod http;
pub mod orchestrator;
pub mod query;
pub mod types;
pub mod validate;

pub use config::{SearchConfig, API_URL, DEFAULT_LOCALE, DOC_BASE_URL};
pub use error::{Result, SchemaError, SearchError, Violation};
pub use fetch::{DocumentSource, MdnClient};
pub use format::{build_article_url, format_document};
pub use query::{build_search_url, SearchQuery};
pub use types::{Document, Highlight, ItemType, ResultItem, ResultText, SearchResponse};
pub use validate::validate;

/// Search MDN and format the matching documents.
///
/// Sends one request to `config.api_url` for `search_word` in
/// `config.locale`, validates the response, and formats every document
/// against `config.doc_base_url`.
///
/// # Errors
///
/// Returns [`SearchError::Config`] for an invalid config,
/// [`SearchError::Transport`] for a non-success status,
/// [`SearchError::Parse`] for a non-JSON body,
/// [`SearchError::Schema`] for a body of the wrong shape, and
/// [`SearchError::UrlConstruction`] for an unusable document path.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> mdn_search::Result<()> {
/// let config = mdn_search::SearchConfig::default();
/// let items = mdn_search::search("Array.prototype.map", &config).await?;
/// for item in &items {
///     println!("{}: {}", item.title, item.arg);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search(search_word: &str, config: &SearchConfig) -> Result<Vec<ResultItem>> {
    let client = MdnClient::new(config)?;
    orchestrator::search_with(&client, search_word, config).await
}

/// Search MDN with the default configuration.
///
/// Convenience wrapper around [`search`] using [`SearchConfig::default()`].
///
/// # Errors
///
/// Same as [`search`].
pub async fn search_default(search_word: &str) -> Result<Vec<ResultItem>> {
    search(search_word, &SearchConfig::default()).await
}
