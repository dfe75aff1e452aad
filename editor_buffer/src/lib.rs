#![no_std]

//! # Editor Buffer
//!
//! The editor document for the Orion playground client.
//!
//! ## Philosophy
//!
//! - **One source of truth**: The document owns exactly one `String`; line
//!   counts, character counts, and line-number labels are pure functions of
//!   that text, computed on demand
//! - **Deterministic**: Same text => same derived stats
//! - **Formatting preserved**: The stored text is never trimmed; trimming
//!   happens only on the submission view handed to the network layer
//! - **No ambient authority**: The document never performs IO and never
//!   touches a display; hosts render it
//!
//! ## Design
//!
//! Line segmentation follows the playground's display rules: lines are the
//! `\n`-separated segments of the text, so `"a\n"` is two lines (the second
//! empty) and the empty document is a single empty line.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

/// Editor document with derived display stats
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub struct EditorDocument {
    text: String,
}

impl EditorDocument {
    /// Creates a new empty document
    pub fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    /// Creates a document from existing text
    pub fn from_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Replaces the document text
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Empties the document
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Returns the stored text, untrimmed
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the text as submitted to the compiler service
    ///
    /// Leading and trailing whitespace is stripped from the view only; the
    /// stored text keeps the user's formatting.
    pub fn submission_text(&self) -> &str {
        self.text.trim()
    }

    /// Returns true if the document has nothing to submit
    pub fn is_blank(&self) -> bool {
        self.submission_text().is_empty()
    }

    /// Number of display lines (minimum 1, even for empty text)
    pub fn line_count(&self) -> usize {
        self.text.split('\n').count()
    }

    /// Number of characters in the text
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// The display lines, one segment per `\n` boundary
    pub fn lines(&self) -> Vec<&str> {
        self.text.split('\n').collect()
    }

    /// Line-number gutter labels, `"1"` through `"N"`
    pub fn line_number_labels(&self) -> Vec<String> {
        (1..=self.line_count()).map(|n| n.to_string()).collect()
    }
}

/// Indentation carried onto a new line inserted after `previous_line`
///
/// Reproduces the playground editor's auto-indent: keep the previous line's
/// leading whitespace, and deepen by four spaces when that line opens a
/// block.
pub fn indent_for_new_line(previous_line: &str) -> String {
    let leading: String = previous_line
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .collect();

    if previous_line.contains('{') {
        leading + "    "
    } else {
        leading
    }
}
