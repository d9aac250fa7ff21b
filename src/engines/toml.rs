//! TOML front matter, conventionally fenced with `+++`.
//!
//! Not part of the default registry; register it when a project opts in:
//!
//! ```
//! use mdmatter::{Delimiters, Options, TomlEngine};
//!
//! let options = Options::default()
//!     .with_delimiters(Delimiters::symmetric("+++"))
//!     .with_language("toml")
//!     .with_engine("toml", TomlEngine);
//! # let _ = options;
//! ```

use serde_yaml::{Mapping, Value};
use toml::Table;

use super::Engine;
use crate::errors::Result;

#[derive(Debug, Clone, Copy, Default)]
pub struct TomlEngine;

impl Engine for TomlEngine {
    fn decode(&self, input: &str) -> Result<Value> {
        let table: Table = toml::from_str(input)?;
        Ok(serde_yaml::to_value(table)?)
    }

    fn encode(&self, data: &Mapping) -> Result<String> {
        Ok(toml::to_string(data)?)
    }
}
