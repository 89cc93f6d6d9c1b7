//! Core data model definitions shared across tubedeck crates.
#![allow(missing_docs)]

pub mod device;
pub mod language;
pub mod patch;
pub mod prelude;
pub mod settings;

pub use device::DeviceClass;
pub use language::{Language, LanguageTable, LanguageTableError};
pub use patch::SettingsPatch;
pub use settings::AppSettings;
