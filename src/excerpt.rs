//! Excerpt extraction: a separator-bounded prefix of the body content.

use serde_yaml::Value;

use crate::options::{ExcerptMode, Options};
use crate::types::ParsedDocument;

/// Extract an excerpt from `doc.content`, if one was requested.
///
/// Separator precedence: an explicit [`ExcerptMode::Separator`], then an
/// `excerpt_separator` key declared in the front matter data itself, then
/// the `excerpt_separator` option, then the closing delimiter. Supplying a
/// separator through any of these counts as requesting an excerpt. A
/// separator that never occurs in the content yields no excerpt; that is
/// not an error.
pub(crate) fn extract(doc: &ParsedDocument, options: &Options) -> Option<String> {
    let declared = doc
        .data
        .get("excerpt_separator")
        .and_then(Value::as_str)
        .map(str::to_string)
        .or_else(|| options.excerpt_separator.clone());

    let separator = match &options.excerpt {
        ExcerptMode::Callback(callback) => return callback(doc),
        ExcerptMode::Separator(separator) => separator.clone(),
        ExcerptMode::Enabled => {
            declared.unwrap_or_else(|| options.delimiters.close.clone())
        }
        ExcerptMode::Disabled => declared?,
    };

    doc.content
        .find(&separator)
        .map(|index| doc.content[..index].to_string())
}
