//! The language directive attached to the opening fence, e.g. `---json`.

use std::collections::HashMap;

use serde::Serialize;

/// Language tag written after the opening delimiter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Directive {
    /// Text exactly as it appears on the fence line; may be empty.
    pub raw: String,
    /// Trimmed form of `raw`; `None` when nothing but whitespace was
    /// written.
    pub name: Option<String>,
}

impl Directive {
    pub(crate) fn from_raw(raw: &str) -> Self {
        let trimmed = raw.trim();
        Directive {
            raw: raw.to_string(),
            name: (!trimmed.is_empty()).then(|| trimmed.to_string()),
        }
    }
}

/// Resolve the effective language for a directive name.
///
/// An absent name falls back to `default`, then the alias table is
/// consulted with the lowercased candidate. The lookup key alone is
/// case-insensitive; a hit returns the table's value with its casing
/// intact, a miss passes the candidate through unchanged.
pub fn resolve_language(
    name: Option<&str>,
    default: &str,
    aliases: &HashMap<String, String>,
) -> String {
    let candidate = name.unwrap_or(default);
    aliases
        .get(&candidate.to_lowercase())
        .cloned()
        .unwrap_or_else(|| candidate.to_string())
}
