//! Pluggable decode/encode engines keyed by language name.
//!
//! An engine owns the actual metadata format; the crate only dispatches to
//! it. The default registry provides `yaml` and `json`; a TOML engine ships
//! here too but must be registered explicitly.

mod json;
mod toml;
mod yaml;

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde_yaml::{Mapping, Value};

use crate::errors::{MatterError, Result};

pub use json::JsonEngine;
pub use toml::TomlEngine;
pub use yaml::YamlEngine;

/// Decode/encode capability for one front matter language.
///
/// Decoders face untrusted input; they may return any value, and the
/// registry normalizes non-mappings away before data reaches callers.
pub trait Engine: Send + Sync {
    /// Parse raw matter text into a value.
    fn decode(&self, input: &str) -> Result<Value>;

    /// Render a data mapping back into matter text.
    fn encode(&self, data: &Mapping) -> Result<String>;
}

/// Map from language name to its engine.
///
/// Read-only configuration once handed to a parse or stringify call; lookup
/// is case-sensitive exact match, aliasing happens earlier during language
/// resolution.
#[derive(Clone)]
pub struct EngineRegistry {
    engines: BTreeMap<String, Arc<dyn Engine>>,
}

impl EngineRegistry {
    /// A registry with no engines at all.
    pub fn empty() -> Self {
        EngineRegistry { engines: BTreeMap::new() }
    }

    /// Register `engine` under `name`, replacing any previous entry.
    pub fn register(&mut self, name: impl Into<String>, engine: impl Engine + 'static) {
        self.engines.insert(name.into(), Arc::new(engine));
    }

    /// Look up the engine for `language`.
    pub fn get(&self, language: &str) -> Option<&dyn Engine> {
        self.engines.get(language).map(|engine| &**engine)
    }

    /// Names of all registered engines.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.engines.keys().map(String::as_str)
    }

    /// Decode `raw` with the engine for `language`.
    ///
    /// Non-mapping decode results (scalars, sequences, null) collapse to an
    /// empty mapping so callers can always treat data as a mapping.
    pub fn decode(&self, language: &str, raw: &str) -> Result<Mapping> {
        let engine = self
            .get(language)
            .ok_or_else(|| MatterError::UnknownLanguage(language.to_string()))?;
        Ok(match engine.decode(raw)? {
            Value::Mapping(mapping) => mapping,
            _ => Mapping::new(),
        })
    }

    /// Encode `data` with the engine for `language`.
    pub fn encode(&self, language: &str, data: &Mapping) -> Result<String> {
        let engine = self
            .get(language)
            .ok_or_else(|| MatterError::UnknownLanguage(language.to_string()))?;
        engine.encode(data)
    }
}

impl Default for EngineRegistry {
    fn default() -> Self {
        let mut registry = EngineRegistry::empty();
        registry.register("yaml", YamlEngine);
        registry.register("json", JsonEngine);
        registry
    }
}

impl fmt::Debug for EngineRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineRegistry")
            .field("languages", &self.engines.keys().collect::<Vec<_>>())
            .finish()
    }
}
