//! Document assembly: front matter block, excerpt, and content back into
//! one string.

use serde_yaml::Mapping;

use crate::directive::resolve_language;
use crate::errors::Result;
use crate::options::Options;
use crate::types::ParsedDocument;

/// Assemble `content` and `data` into a fenced document with default
/// options.
pub fn stringify(content: &str, data: &Mapping) -> Result<String> {
    stringify_with(content, data, &Options::default())
}

/// Assemble `content` and `data` using the options' language and fences.
pub fn stringify_with(content: &str, data: &Mapping, options: &Options) -> Result<String> {
    let doc = ParsedDocument {
        content: content.to_string(),
        data: data.clone(),
        ..ParsedDocument::default()
    };
    serialize(&doc, options)
}

/// Assemble a parsed document back into a document string.
///
/// The document's own language wins over the options' default, so a parsed
/// `---json` document round-trips through the JSON engine. Data that
/// encodes to the empty mapping emits no block at all, mirroring the
/// parse-side emptiness notion. A carried excerpt is emitted, followed by
/// the separator, only when the content does not already contain it; a
/// parsed excerpt is a prefix of its content, so round trips stay
/// idempotent.
pub fn serialize(doc: &ParsedDocument, options: &Options) -> Result<String> {
    let language = if doc.language.is_empty() {
        resolve_language(None, &options.language, &options.aliases)
    } else {
        doc.language.clone()
    };
    let encoded = options.engines.encode(&language, &doc.data)?;
    let block = encoded.trim();

    let mut out = String::new();
    if !block.is_empty() && block != "{}" {
        push_line(&mut out, &options.delimiters.open);
        push_line(&mut out, block);
        push_line(&mut out, &options.delimiters.close);
    }

    if let Some(excerpt) = &doc.excerpt
        && !excerpt.is_empty()
        && !doc.content.contains(excerpt.trim())
    {
        let separator = options
            .excerpt_separator
            .as_deref()
            .unwrap_or(&options.delimiters.close);
        push_line(&mut out, excerpt);
        push_line(&mut out, separator);
    }

    if !doc.content.is_empty() {
        push_line(&mut out, &doc.content);
    }

    Ok(out)
}

// "Newline-terminated" everywhere means: append '\n' only when the text
// does not already end with one, never a second.
fn push_line(out: &mut String, text: &str) {
    out.push_str(text);
    if !text.ends_with('\n') {
        out.push('\n');
    }
}
