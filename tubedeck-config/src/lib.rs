//! Shared configuration library for tubedeck.
//!
//! This crate owns the client configuration models, the file loader that
//! produces them, and the tracing subscriber setup used at the composition
//! root. Library crates never read configuration themselves; the resolved
//! values are passed in explicitly.

pub mod constants;
pub mod loader;
pub mod logging;
pub mod models;

pub use loader::{ConfigLoad, ConfigSource, error::ConfigLoadError};
pub use logging::init_tracing;
pub use models::{
    ClientConfig, DeviceClassSetting, DeviceConfig, LanguagesConfig,
    LoggingConfig, StoreConfig, StyleSettings,
};
