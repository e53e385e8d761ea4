//! Alfred script filter for MDN Web Docs.
//!
//! The `mdn-alfred` binary joins its arguments into a search phrase, runs
//! it through [`mdn_search`], and prints `{"items": [...]}` for Alfred.
//! Failures go to stderr: schema failures as a JSON list of violations,
//! anything else as a single message.

pub mod alfred;
pub mod error;

pub use alfred::{ScriptFilterOutput, render_items, run, search_phrase, write_output};
pub use error::{AlfredError, Result};
