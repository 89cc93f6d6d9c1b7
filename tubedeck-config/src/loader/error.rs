use std::path::PathBuf;

use thiserror::Error;
use tubedeck_model::LanguageTableError;

#[derive(Error, Debug)]
pub enum ConfigLoadError {
    #[error("failed to read config from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML config {origin}: {source}")]
    Toml {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid JSON config {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid language table: {0}")]
    Languages(#[from] LanguageTableError),
}
