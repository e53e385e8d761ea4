//! Error types for the mdn-alfred command line.

use mdn_search::SearchError;

/// Top-level error type for the script filter.
#[derive(Debug, thiserror::Error)]
pub enum AlfredError {
    /// The MDN search failed.
    #[error(transparent)]
    Search(#[from] SearchError),

    /// Result items could not be serialized.
    #[error("output error: {0}")]
    Output(#[from] serde_json::Error),

    /// Writing to stdout failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AlfredError {
    /// The stderr rendering of this error.
    ///
    /// Schema failures print their violations as a JSON array so every
    /// mismatch is visible; everything else prints its message.
    pub fn diagnostic(&self) -> String {
        let detail = match self {
            Self::Search(err) => match err.violations() {
                Some(violations) => {
                    serde_json::to_string_pretty(violations).unwrap_or_else(|_| err.to_string())
                }
                None => err.to_string(),
            },
            other => other.to_string(),
        };
        format!("ERROR {detail}")
    }
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, AlfredError>;
