//! Error types for configuration construction and content providers.
//!
//! Construction errors surface while a configuration is built or
//! deserialized. Rendering itself never fails: provider errors are turned
//! into inline text by the resolver.

use std::path::PathBuf;

use thiserror::Error;

/// A colour value that cannot be represented on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("colour index {0} is outside 0..=255")]
    IndexOutOfRange(i64),

    #[error("`{0}` is not a #RRGGBB hex colour")]
    MalformedHex(String),

    #[error("unknown colour `{0}`")]
    UnknownName(String),
}

/// A style string or attribute that cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    #[error("unknown text attribute `{0}`")]
    UnknownAttribute(String),

    #[error("invalid colour in style: {0}")]
    Color(#[from] ColorError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeparatorError {
    #[error("unknown separator preset `{0}`")]
    UnknownPreset(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SegmentError {
    #[error("segment declares both `text` and `provider`")]
    Ambiguous,

    #[error("segment declares neither `text` nor `provider`")]
    Empty,
}

/// Failure raised by a content provider. Rendered inline in place of the
/// segment's content.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    #[error("unknown provider {0}")]
    Unknown(String),

    #[error("{name}: bad arguments: {reason}")]
    Arguments { name: String, reason: String },

    #[error("{0}")]
    Failed(String),
}

/// Errors that can occur while loading or persisting configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error on {path}: {error}")]
    Io {
        path: PathBuf,
        error: std::io::Error,
    },

    #[error("TOML parse error in {path}: {error}")]
    Toml {
        path: PathBuf,
        error: toml::de::Error,
    },

    #[error("snapshot error in {path}: {error}")]
    Json {
        path: PathBuf,
        error: serde_json::Error,
    },

    #[error("no config.toml found (looked in {0})")]
    NotFound(String),

    #[error("cannot determine the {0} directory")]
    NoDirectory(&'static str),
}
