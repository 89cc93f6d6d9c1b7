use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tubedeck_model::{DeviceClass, Language, LanguageTable};

use crate::constants::{
    APP_DIR_NAME, DEFAULT_LOG_FILTER, SETTINGS_FILE_NAME,
};
use crate::loader::error::ConfigLoadError;

/// Top-level client configuration. Every section has defaults, so an empty
/// file (or no file at all) yields a working handheld client with the
/// built-in language table and an in-memory settings store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub device: DeviceConfig,
    pub languages: LanguagesConfig,
    pub style: StyleSettings,
    pub store: StoreConfig,
    pub logging: LoggingConfig,
}

impl ClientConfig {
    /// Resolve the device class once, at the composition root
    pub fn device_class(&self, platform_is_tv: bool) -> DeviceClass {
        self.device.class.resolve(platform_is_tv)
    }

    /// Build the validated language table described by this configuration
    pub fn language_table(&self) -> Result<LanguageTable, ConfigLoadError> {
        self.languages.table()
    }

    /// Same configuration with the settings record kept in memory
    #[must_use]
    pub fn with_in_memory_store(mut self) -> Self {
        self.store.in_memory = true;
        self
    }

    /// Check everything that can only be checked after parsing
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        self.language_table().map(|_| ())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    /// `auto` follows the platform flag; the others pin the device class
    pub class: DeviceClassSetting,
}

/// Device class as written in configuration
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClassSetting {
    #[default]
    Auto,
    Handheld,
    Tv,
}

impl DeviceClassSetting {
    pub fn resolve(self, platform_is_tv: bool) -> DeviceClass {
        match self {
            Self::Auto => DeviceClass::from_is_tv(platform_is_tv),
            Self::Handheld => DeviceClass::Handheld,
            Self::Tv => DeviceClass::Tv,
        }
    }
}

/// Language table override. Without `entries` the built-in table is used,
/// with `default` picking its fallback entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguagesConfig {
    pub default: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entries: Option<Vec<Language>>,
}

impl Default for LanguagesConfig {
    fn default() -> Self {
        Self {
            default: LanguageTable::builtin_default_code().to_string(),
            entries: None,
        }
    }
}

impl LanguagesConfig {
    pub fn table(&self) -> Result<LanguageTable, ConfigLoadError> {
        let table = match &self.entries {
            Some(entries) => LanguageTable::new(entries.clone(), &self.default),
            None => LanguageTable::builtin_with_default(&self.default),
        }?;
        Ok(table)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleSettings {
    /// Whether the expanded (TV) token set is available on this build.
    /// When false, TV-class devices render with the compact set.
    pub expanded_tokens: bool,
}

impl Default for StyleSettings {
    fn default() -> Self {
        Self {
            expanded_tokens: true,
        }
    }
}

/// Where the settings record lives
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Keep the record in memory only (tests, demo builds)
    pub in_memory: bool,
    /// Explicit settings file; defaults to the platform config dir
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl StoreConfig {
    /// Settings file to use, `None` when the store is in-memory or no
    /// platform config directory exists
    pub fn settings_path(&self) -> Option<PathBuf> {
        if self.in_memory {
            return None;
        }
        self.path.clone().or_else(|| {
            dirs::config_dir()
                .map(|dir| dir.join(APP_DIR_NAME).join(SETTINGS_FILE_NAME))
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive string
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}
