use std::path::PathBuf;

use thiserror::Error;

/// Failure to turn a descriptor document into a `VersionInfo`
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Failed to decode descriptor: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid field {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Descriptor not found: {0}")]
    NotFound(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to scan mods directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Unknown unit: {0}")]
    UnknownUnit(String),
}
