//! Error types raised by the adapter.

use thiserror::Error;

use crate::core::{ConfigError, DictionaryError};

#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("no level data stored under {id}")]
    MissingLevel { id: &'static str },

    #[error("level data {id} is invalid: {source}")]
    Config {
        id: &'static str,
        #[source]
        source: ConfigError,
    },

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Dictionary(#[from] DictionaryError),

    #[error("failed to encode message: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AdapterError>;
