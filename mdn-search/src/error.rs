//! Error types for the mdn-search crate.
//!
//! Every failure aborts the whole search. Nothing is retried and no
//! partial result is ever returned alongside an error.

use serde::Serialize;
use std::fmt;

/// Errors that can occur while fetching, validating, or formatting results.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The API answered with a non-success HTTP status.
    #[error("{status}:{status_text} Failed to fetch data from MDN API.")]
    Transport {
        /// Numeric HTTP status code.
        status: u16,
        /// Reason phrase for the status code.
        status_text: String,
    },

    /// The request could not be sent or the body could not be read.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The response body is not valid JSON.
    #[error("parse error: {0}")]
    Parse(String),

    /// The response body parsed but does not match the expected shape.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// An article URL could not be built from a document path.
    #[error("URL construction error: {0}")]
    UrlConstruction(String),

    /// Invalid search configuration.
    #[error("config error: {0}")]
    Config(String),
}

impl SearchError {
    /// Returns the schema violations if this is a [`SearchError::Schema`].
    pub fn violations(&self) -> Option<&[Violation]> {
        match self {
            Self::Schema(err) => Some(err.violations()),
            _ => None,
        }
    }
}

/// Convenience type alias for mdn-search results.
pub type Result<T> = std::result::Result<T, SearchError>;

/// A single field-level schema violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Location of the offending value, e.g. `documents[0].mdn_url`.
    /// Empty for the root value.
    pub path: String,
    /// The JSON type the schema requires at `path`.
    pub expected: String,
    /// The JSON type actually present, or `missing`.
    pub found: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = if self.path.is_empty() {
            "<root>"
        } else {
            &self.path
        };
        write!(f, "{path}: expected {}, found {}", self.expected, self.found)
    }
}

/// A response that failed schema validation.
///
/// Always carries at least one [`Violation`]; callers can enumerate all of
/// them through [`SchemaError::violations`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaError {
    violations: Vec<Violation>,
}

impl SchemaError {
    pub(crate) fn new(violations: Vec<Violation>) -> Self {
        debug_assert!(!violations.is_empty());
        Self { violations }
    }

    /// All violations, in the order they occur in the response.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Consumes the error, returning the violations.
    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "response failed schema validation ({} violation{})",
            self.violations.len(),
            if self.violations.len() == 1 { "" } else { "s" }
        )?;
        for violation in &self.violations {
            write!(f, "; {violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for SchemaError {}
