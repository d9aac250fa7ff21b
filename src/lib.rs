//! Front matter extraction, excerpt splitting, and document assembly.
//!
//! A document may open with a fenced metadata block:
//!
//! ```markdown
//! ---
//! title: Home
//! ---
//! # Hello
//! ```
//!
//! This crate splits such a document into the raw matter text, an optional
//! excerpt, and the body content, decoding the matter through pluggable
//! per-language engines (`yaml` and `json` by default, `toml` on request).
//! The mirror path assembles data, excerpt, and content back into a single
//! string.
//!
//! Block location is delimiter-based substring search rather than a
//! whole-document regex, so degenerate inputs stay cheap and predictable:
//! a missing closing fence consumes the rest of the document, a blank or
//! comment-only block yields empty data, and a dash run like `----` is
//! content, not a fence.
//!
//! ```
//! let doc = mdmatter::parse("---\ntitle: Home\n---\n# Hello\n")?;
//!
//! assert_eq!(doc.data.get("title").and_then(|v| v.as_str()), Some("Home"));
//! assert_eq!(doc.content, "# Hello\n");
//! # Ok::<(), mdmatter::MatterError>(())
//! ```

pub mod delimiters;
pub mod directive;
pub mod engines;
pub mod errors;
mod excerpt;
pub mod options;
pub mod parser;
mod scan;
pub mod serializer;
pub mod types;

pub use delimiters::Delimiters;
pub use directive::{Directive, resolve_language};
pub use engines::{Engine, EngineRegistry, JsonEngine, TomlEngine, YamlEngine};
pub use errors::{MatterError, Result};
pub use options::{ExcerptFn, ExcerptMode, Options};
pub use parser::{language, language_with, parse, parse_with, read, read_with, test, test_with};
pub use serializer::{serialize, stringify, stringify_with};
pub use types::ParsedDocument;

/// Value model decoded matter is expressed in, re-exported for callers
/// building or inspecting data mappings.
pub use serde_yaml::{Mapping, Value};
