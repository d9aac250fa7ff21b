//! Parse-path entry points: split a document into matter, excerpt, and
//! body content.

use std::fs;
use std::path::Path;

use crate::directive::{Directive, resolve_language};
use crate::errors::Result;
use crate::excerpt;
use crate::options::Options;
use crate::scan;
use crate::types::ParsedDocument;

/// Parse `source` with default options (`---` fences, YAML matter).
pub fn parse(source: &str) -> Result<ParsedDocument> {
    parse_with(source, &Options::default())
}

/// Parse `source` into front matter, optional excerpt, and body content.
///
/// Degenerate input never fails this path: a document without a fence is
/// all content, an unterminated block consumes the rest of the document
/// with empty content, and a blank or comment-only block yields empty data
/// with the original source kept in `empty`. The failures that remain are
/// dispatch to an unregistered language and the engine rejecting the block.
pub fn parse_with(source: &str, options: &Options) -> Result<ParsedDocument> {
    let Some(block) = scan::scan(source, &options.delimiters) else {
        let mut doc = ParsedDocument::plain(source);
        doc.language = resolve_language(None, &options.language, &options.aliases);
        doc.excerpt = excerpt::extract(&doc, options);
        return Ok(doc);
    };

    let directive = Directive::from_raw(block.directive_raw);
    let language =
        resolve_language(directive.name.as_deref(), &options.language, &options.aliases);
    tracing::trace!(language = %language, "front matter fence located");

    let mut doc = ParsedDocument {
        content: block.content.to_string(),
        matter: block.matter.to_string(),
        language,
        directive: Some(directive),
        ..ParsedDocument::default()
    };

    if scan::is_blank(&doc.matter) {
        doc.empty = Some(source.to_string());
    } else {
        doc.data = options.engines.decode(&doc.language, &doc.matter)?;
    }

    doc.excerpt = excerpt::extract(&doc, options);
    Ok(doc)
}

/// Whether `source` opens with a front matter fence.
pub fn test(source: &str) -> bool {
    test_with(source, &Options::default())
}

/// [`test`] under explicit options.
pub fn test_with(source: &str, options: &Options) -> bool {
    scan::has_matter(source, &options.delimiters)
}

/// The trimmed language directive of `source`, if it has one.
///
/// No default or alias is applied here: `---json` yields `Some("json")`, a
/// bare fence yields `None`, and so does a document without front matter.
pub fn language(source: &str) -> Option<String> {
    language_with(source, &Options::default())
}

/// [`language`] under explicit options.
pub fn language_with(source: &str, options: &Options) -> Option<String> {
    let block = scan::scan(source, &options.delimiters)?;
    Directive::from_raw(block.directive_raw).name
}

/// Read a file and parse it with default options.
///
/// Read failures propagate untouched.
pub fn read(path: impl AsRef<Path>) -> Result<ParsedDocument> {
    read_with(path, &Options::default())
}

/// [`read`] under explicit options.
pub fn read_with(path: impl AsRef<Path>, options: &Options) -> Result<ParsedDocument> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "reading document");
    let source = fs::read_to_string(path)?;
    parse_with(&source, options)
}
