//! Core types for MDN search documents and launcher result items.

use serde::{Deserialize, Serialize};

/// Highlighted snippets the API attaches to each hit.
///
/// Not surfaced in result items, but still validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    /// Body snippets.
    pub body: Vec<String>,
    /// Title snippets.
    pub title: Vec<String>,
}

/// A single search hit from the MDN documentation API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Site-relative path of the article, e.g. `/en-US/docs/Web/API/Fetch_API`.
    pub mdn_url: String,
    /// Relevance score assigned by the API.
    pub score: f64,
    /// Article title.
    pub title: String,
    /// Locale of the article.
    pub locale: String,
    /// Article slug.
    pub slug: String,
    /// Popularity metric assigned by the API.
    pub popularity: f64,
    /// Plain-text summary; may carry surrounding whitespace.
    pub summary: String,
    /// Highlighted snippets.
    pub highlight: Highlight,
}

/// A validated search API response.
///
/// Documents keep the order the API returned them in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Matching documents, relevance-ranked upstream.
    pub documents: Vec<Document>,
}

impl SearchResponse {
    /// Extract the document list.
    pub fn into_documents(self) -> Vec<Document> {
        self.documents
    }
}

/// Text variants Alfred uses for copy (⌘C) and large type (⌘L).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultText {
    /// Copied to the clipboard; the article URL.
    pub copy: String,
    /// Shown in large type; the trimmed summary.
    pub largetype: String,
}

/// Alfred item type. Only `default` is ever produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    /// Regular result item.
    Default,
}

/// The launcher-facing output record for one [`Document`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultItem {
    /// Article title.
    pub title: String,
    /// Absolute article URL passed on when the item is actioned.
    pub arg: String,
    /// Trimmed summary.
    pub subtitle: String,
    /// Same absolute URL, used for Quick Look.
    pub quicklookurl: String,
    /// Copy and large-type text.
    pub text: ResultText,
    /// Item type.
    #[serde(rename = "type")]
    pub item_type: ItemType,
}
