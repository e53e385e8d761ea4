//! Search URL construction.
//!
//! Query text is encoded with `application/x-www-form-urlencoded` rules, so
//! spaces become `+` and reserved or non-ASCII characters are
//! percent-encoded. Parameter order is fixed: `q`, `locale`, `sort`.

use crate::config::DEFAULT_LOCALE;
use url::Url;

/// Sort order requested from the API.
const SORT_ORDER: &str = "best";

/// Parameters owned by [`build_search_url`]; existing values are replaced.
const OWNED_PARAMS: &[&str] = &["q", "locale", "sort"];

/// A free-text query together with the locale to search in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Caller-supplied search text. May be empty.
    pub text: String,
    /// Locale tag, e.g. `en-US`.
    pub locale: String,
}

impl SearchQuery {
    /// Create a query in the default locale.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            locale: DEFAULT_LOCALE.to_owned(),
        }
    }

    /// Override the locale.
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Build the search URL for this query against `endpoint`.
    pub fn to_url(&self, endpoint: &Url) -> Url {
        build_search_url(&self.text, &self.locale, endpoint)
    }
}

/// Build a search URL with `q`, `locale` and `sort=best` set.
///
/// Any `q`, `locale` or `sort` already present on `endpoint` is replaced.
/// Other existing parameters are kept, ahead of the search parameters.
pub fn build_search_url(query: &str, locale: &str, endpoint: &Url) -> Url {
    let mut url = endpoint.clone();
    let kept: Vec<(String, String)> = endpoint
        .query_pairs()
        .filter(|(key, _)| !OWNED_PARAMS.contains(&key.as_ref()))
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    url.set_query(None);
    url.query_pairs_mut()
        .extend_pairs(kept)
        .append_pair("q", query)
        .append_pair("locale", locale)
        .append_pair("sort", SORT_ORDER);
    url
}
