//! Search orchestrator: fetch once, then format every document in order.
//!
//! Any failure aborts the whole search; no partial result list is ever
//! returned.

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::fetch::DocumentSource;
use crate::format::format_document;
use crate::query::SearchQuery;
use crate::types::ResultItem;

/// Run the search pipeline against `source`.
///
/// # Pipeline
///
/// 1. Fetch the response for `search_word` in `config.locale`
/// 2. Extract the document list
/// 3. Format each document against `config.doc_base_url`, keeping order
///
/// # Errors
///
/// Propagates fetch failures unchanged, and returns
/// [`SearchError::UrlConstruction`] if any document path cannot be turned
/// into an article URL.
pub async fn search_with<S: DocumentSource>(
    source: &S,
    search_word: &str,
    config: &SearchConfig,
) -> Result<Vec<ResultItem>, SearchError> {
    let base_url = config.doc_base()?;

    let query = SearchQuery::new(search_word).with_locale(config.locale.as_str());
    let documents = source.fetch_results(&query).await?.into_documents();
    tracing::debug!(count = documents.len(), "MDN returned documents");

    documents
        .iter()
        .map(|doc| format_document(doc, &base_url))
        .collect()
}
