//! YAML front matter via `serde_yaml`.

use serde_yaml::{Mapping, Value};

use super::Engine;
use crate::errors::Result;

/// The conventional front matter language; registered by default.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlEngine;

impl Engine for YamlEngine {
    fn decode(&self, input: &str) -> Result<Value> {
        Ok(serde_yaml::from_str(input)?)
    }

    fn encode(&self, data: &Mapping) -> Result<String> {
        Ok(serde_yaml::to_string(data)?)
    }
}
