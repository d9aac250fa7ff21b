//! JSON front matter via `serde_json`.

use serde_yaml::{Mapping, Value};

use super::Engine;
use crate::errors::Result;

/// JSON matter blocks, written `---json` under the default fences.
/// Encoding pretty-prints, the way hand-written JSON matter reads.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEngine;

impl Engine for JsonEngine {
    fn decode(&self, input: &str) -> Result<Value> {
        let parsed: serde_json::Value = serde_json::from_str(input)?;
        Ok(serde_yaml::to_value(parsed)?)
    }

    fn encode(&self, data: &Mapping) -> Result<String> {
        Ok(serde_json::to_string_pretty(data)?)
    }
}
