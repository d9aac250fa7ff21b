//! The parsed document model.

use serde::Serialize;
use serde_yaml::Mapping;

use crate::directive::Directive;

/// Result of splitting a document into front matter, excerpt, and body.
///
/// The source string is never mutated; every field is a slice-derived copy
/// computed during one parse. Fields are plain data, the way the rest of
/// the crate consumes them.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ParsedDocument {
    /// Body content after the closing fence, or the entire document when no
    /// front matter is present.
    pub content: String,
    /// Decoded front matter. Always a mapping; non-mapping decode results
    /// collapse to empty.
    pub data: Mapping,
    /// Excerpt bounded by the configured separator, when one was requested
    /// and found.
    pub excerpt: Option<String>,
    /// Raw matter text between the fences, exactly as the engine saw it.
    pub matter: String,
    /// The original document, surfaced when a detected block carried no
    /// real data (blank or comment-only). Useful for diagnostics.
    pub empty: Option<String>,
    /// Language the block was decoded with, after default and alias
    /// resolution.
    pub language: String,
    /// Directive from the opening fence; present iff front matter was
    /// detected.
    pub directive: Option<Directive>,
}

impl ParsedDocument {
    /// A document with no front matter: everything is content.
    pub(crate) fn plain(source: &str) -> Self {
        ParsedDocument { content: source.to_string(), ..ParsedDocument::default() }
    }

    /// Whether the document opened with a front matter fence.
    pub fn has_matter(&self) -> bool {
        self.directive.is_some()
    }

    /// Whether a detected block carried no real data.
    pub fn is_empty_matter(&self) -> bool {
        self.empty.is_some()
    }
}
