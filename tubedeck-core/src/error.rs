use std::path::PathBuf;

use thiserror::Error;

/// Failures of a settings store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Settings store unavailable: {0}")]
    Unavailable(String),
}

/// Failures surfaced by the settings domain
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Settings store error: {0}")]
    Store(#[from] StoreError),

    #[error("Account action failed: {0}")]
    Account(#[source] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, SettingsError>;
