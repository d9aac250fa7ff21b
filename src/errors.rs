//! Error taxonomy for parse and stringify paths.
//!
//! A missing engine is the only failure the crate originates itself; engine
//! decode/encode failures and file-read failures pass through as sources.
//! Malformed documents (an opening fence with no closing fence) are not
//! errors on either path.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MatterError>;

/// Errors surfaced by parsing, decoding, or assembling front matter.
#[derive(Debug, Error)]
pub enum MatterError {
    /// The resolved language has no engine in the registry, on either the
    /// decode or the encode path.
    #[error("no front matter engine registered for language '{0}'")]
    UnknownLanguage(String),

    #[error("invalid YAML front matter: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON front matter: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid TOML front matter: {0}")]
    TomlDecode(#[from] toml::de::Error),

    #[error("front matter data is not representable as TOML: {0}")]
    TomlEncode(#[from] toml::ser::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Escape hatch for user-supplied engines with their own error types.
    #[error("front matter engine failed: {0}")]
    Engine(#[source] Box<dyn std::error::Error + Send + Sync>),
}
