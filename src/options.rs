//! Per-call configuration.
//!
//! Defaults mirror the common convention: `---` fences, YAML matter, a
//! `yml` alias, no excerpt. Options are read-only for the duration of one
//! parse or stringify call; concurrent calls with different options never
//! interfere.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::delimiters::Delimiters;
use crate::engines::{Engine, EngineRegistry};
use crate::types::ParsedDocument;

/// Callback computing an excerpt from the full parser state.
pub type ExcerptFn = Arc<dyn Fn(&ParsedDocument) -> Option<String> + Send + Sync>;

/// How (and whether) an excerpt is extracted from body content.
#[derive(Clone, Default)]
pub enum ExcerptMode {
    /// No excerpt.
    #[default]
    Disabled,
    /// Search for the configured separator, falling back to the closing
    /// delimiter.
    Enabled,
    /// Search for this exact separator.
    Separator(String),
    /// Derive the excerpt from the parsed document; the return value is
    /// used verbatim.
    Callback(ExcerptFn),
}

impl fmt::Debug for ExcerptMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExcerptMode::Disabled => f.write_str("Disabled"),
            ExcerptMode::Enabled => f.write_str("Enabled"),
            ExcerptMode::Separator(sep) => f.debug_tuple("Separator").field(sep).finish(),
            ExcerptMode::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}

/// Configuration for one parse or stringify operation.
#[derive(Debug, Clone)]
pub struct Options {
    /// Opening/closing fence pair.
    pub delimiters: Delimiters,
    /// Language assumed when the fence carries no directive.
    pub language: String,
    /// Lowercase alias to canonical language name.
    pub aliases: HashMap<String, String>,
    /// Engines available for decode/encode dispatch.
    pub engines: EngineRegistry,
    /// Excerpt extraction mode.
    pub excerpt: ExcerptMode,
    /// Separator for excerpt search and for the stringify path. Setting it
    /// counts as requesting an excerpt.
    pub excerpt_separator: Option<String>,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            delimiters: Delimiters::default(),
            language: "yaml".to_string(),
            aliases: HashMap::from([("yml".to_string(), "yaml".to_string())]),
            engines: EngineRegistry::default(),
            excerpt: ExcerptMode::Disabled,
            excerpt_separator: None,
        }
    }
}

impl Options {
    pub fn with_delimiters(mut self, delimiters: impl Into<Delimiters>) -> Self {
        self.delimiters = delimiters.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Map `alias` (matched case-insensitively) to `canonical`.
    pub fn with_alias(mut self, alias: impl Into<String>, canonical: impl Into<String>) -> Self {
        self.aliases.insert(alias.into().to_lowercase(), canonical.into());
        self
    }

    /// Register an additional engine under `name`.
    pub fn with_engine(mut self, name: impl Into<String>, engine: impl Engine + 'static) -> Self {
        self.engines.register(name, engine);
        self
    }

    pub fn with_excerpt(mut self, excerpt: ExcerptMode) -> Self {
        self.excerpt = excerpt;
        self
    }

    pub fn with_excerpt_separator(mut self, separator: impl Into<String>) -> Self {
        self.excerpt_separator = Some(separator.into());
        self
    }
}
