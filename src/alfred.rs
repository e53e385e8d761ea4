//! Alfred script filter output.
//!
//! Alfred reads a single JSON object `{"items": [...]}` from stdout. Each
//! item is a [`ResultItem`] produced by the search pipeline.

use crate::error::Result;
use mdn_search::{ResultItem, SearchConfig};
use serde::Serialize;
use std::io::Write;

/// The script filter document printed on success.
#[derive(Debug, Clone, Serialize)]
pub struct ScriptFilterOutput {
    /// Result items in the order MDN ranked them.
    pub items: Vec<ResultItem>,
}

/// Join positional arguments into the search phrase.
///
/// Words are separated by single spaces; no arguments gives an empty phrase.
pub fn search_phrase<S: AsRef<str>>(words: &[S]) -> String {
    words
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Serialize `items` as a compact script filter document.
///
/// # Errors
///
/// Returns [`crate::AlfredError::Output`] if serialization fails.
pub fn render_items(items: Vec<ResultItem>) -> Result<String> {
    Ok(serde_json::to_string(&ScriptFilterOutput { items })?)
}

/// Search MDN for `phrase` and render the script filter document.
///
/// # Errors
///
/// Propagates every search failure unchanged.
pub async fn run(phrase: &str, config: &SearchConfig) -> Result<String> {
    let items = mdn_search::search(phrase, config).await?;
    tracing::debug!(count = items.len(), "rendering result items");
    render_items(items)
}

/// Write a rendered document followed by a newline.
///
/// # Errors
///
/// Returns [`crate::AlfredError::Io`] if the write fails.
pub fn write_output(out: &mut impl Write, rendered: &str) -> Result<()> {
    writeln!(out, "{rendered}")?;
    out.flush()?;
    Ok(())
}
