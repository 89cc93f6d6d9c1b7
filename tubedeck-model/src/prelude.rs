//! UI focused snapshot of the model surface.
//! Prefer importing from this module in view models and presentation layers.

pub use super::device::DeviceClass;
pub use super::language::{Language, LanguageTable, LanguageTableError};
pub use super::patch::SettingsPatch;
pub use super::settings::AppSettings;
