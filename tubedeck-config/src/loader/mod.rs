//! Client configuration loader
//!
//! Evaluation order:
//! 1) an explicit path handed in by the caller,
//! 2) `config.toml` / `config.json` in the working directory,
//! 3) `<platform config dir>/tubedeck/config.toml`,
//! 4) defaults if none of the above exist.

pub mod error;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::constants::{APP_DIR_NAME, CONFIG_FILE_NAME};
use crate::models::ClientConfig;
use error::ConfigLoadError;

/// Source that produced the client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Default,
    File(PathBuf),
}

/// A loaded and validated configuration together with where it came from
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: ClientConfig,
    pub source: ConfigSource,
}

impl ConfigLoad {
    /// Load from `explicit` if given, otherwise search the default locations.
    /// A missing explicit file is an error; missing default files are not.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigLoadError> {
        let path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => find_default_file(),
        };

        let Some(path) = path else {
            debug!("no client config file found, using defaults");
            return Ok(Self {
                config: ClientConfig::default(),
                source: ConfigSource::Default,
            });
        };

        let config = load_from_file(&path)?;
        config.validate()?;
        info!(path = %path.display(), "loaded client config");
        Ok(Self {
            config,
            source: ConfigSource::File(path),
        })
    }
}

impl ClientConfig {
    /// Parse and validate configuration text. TOML is tried first, then JSON.
    pub fn from_str_validated(
        contents: &str,
        origin: &str,
    ) -> Result<Self, ConfigLoadError> {
        let config = parse_from_str(contents, origin)?;
        config.validate()?;
        Ok(config)
    }

    /// Platform default location of the config file
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
    }
}

pub fn load_from_file(path: &Path) -> Result<ClientConfig, ConfigLoadError> {
    let contents =
        fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    let origin = path.display().to_string();

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => parse_json(&contents, &origin),
        Some("toml") | Some("tml") => parse_toml(&contents, &origin),
        _ => parse_from_str(&contents, &origin),
    }
}

pub fn parse_from_str(
    contents: &str,
    origin: &str,
) -> Result<ClientConfig, ConfigLoadError> {
    parse_toml(contents, origin).or_else(|toml_err| {
        parse_json(contents, origin).map_err(|_| toml_err)
    })
}

fn parse_toml(
    contents: &str,
    origin: &str,
) -> Result<ClientConfig, ConfigLoadError> {
    toml::from_str(contents).map_err(|source| ConfigLoadError::Toml {
        origin: origin.to_string(),
        source,
    })
}

fn parse_json(
    contents: &str,
    origin: &str,
) -> Result<ClientConfig, ConfigLoadError> {
    serde_json::from_str(contents).map_err(|source| ConfigLoadError::Json {
        origin: origin.to_string(),
        source,
    })
}

fn find_default_file() -> Option<PathBuf> {
    const CANDIDATES: &[&str] = &["config.toml", "config.json"];

    CANDIDATES
        .iter()
        .map(Path::new)
        .find(|path| path.exists())
        .map(Path::to_path_buf)
        .or_else(|| ClientConfig::default_path().filter(|path| path.exists()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DeviceClassSetting;

    #[test]
    fn test_empty_toml_is_default() {
        let config = ClientConfig::from_str_validated("", "inline").unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config = ClientConfig::from_str_validated(
            "[device]\nclass = \"tv\"\n",
            "inline",
        )
        .unwrap();
        assert_eq!(config.device.class, DeviceClassSetting::Tv);
        assert!(config.style.expanded_tokens);
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn test_json_fallback() {
        let config = ClientConfig::from_str_validated(
            r#"{ "style": { "expanded_tokens": false } }"#,
            "inline",
        )
        .unwrap();
        assert!(!config.style.expanded_tokens);
    }

    #[test]
    fn test_unknown_device_class_is_rejected() {
        let err = ClientConfig::from_str_validated(
            "[device]\nclass = \"watch\"\n",
            "inline",
        )
        .unwrap_err();
        assert!(matches!(err, ConfigLoadError::Toml { .. }));
    }

    #[test]
    fn test_bad_default_language_fails_validation() {
        let err = ClientConfig::from_str_validated(
            "[languages]\ndefault = \"klingon\"\n",
            "inline",
        )
        .unwrap_err();
        assert!(matches!(err, ConfigLoadError::Languages(_)));
    }
}
