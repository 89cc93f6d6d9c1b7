use std::sync::Arc;

use thiserror::Error;
use tracing::info;
use tubedeck_config::{ClientConfig, ConfigLoadError};
use tubedeck_model::{AppSettings, DeviceClass, LanguageTable};

use crate::design_tokens::{StyleConfig, StyleContext};
use crate::domains::drawer::DrawerModel;
use crate::domains::settings::SettingsDomain;
use crate::services::{
    AccountService, FileSettingsStore, InMemorySettingsStore, SettingsStore,
};

#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigLoadError),
}

/// Process-wide values built once from the client configuration
#[derive(Clone)]
pub struct ClientComposition {
    pub device: DeviceClass,
    pub style: StyleContext,
    pub languages: Arc<LanguageTable>,
    pub settings_store: Arc<dyn SettingsStore>,
    pub account_service: Arc<dyn AccountService>,
}

impl ClientComposition {
    /// `platform_is_tv` is the platform's own device-class flag; the
    /// configuration may pin the class instead.
    pub fn from_config(
        config: &ClientConfig,
        platform_is_tv: bool,
        account_service: Arc<dyn AccountService>,
    ) -> Result<Self, BootstrapError> {
        let device = config.device_class(platform_is_tv);
        let languages = Arc::new(config.language_table()?);
        let style = StyleContext::new(
            device,
            StyleConfig::with_expanded(config.style.expanded_tokens),
        );

        let settings_store: Arc<dyn SettingsStore> =
            match config.store.settings_path() {
                Some(path) => {
                    info!("Using settings file at {}", path.display());
                    Arc::new(FileSettingsStore::new(path))
                }
                None => {
                    info!("Using in-memory settings store");
                    Arc::new(InMemorySettingsStore::new(AppSettings::default()))
                }
            };

        info!(
            device = %device,
            expanded = style.is_expanded(),
            languages = languages.len(),
            "client composed"
        );

        Ok(Self {
            device,
            style,
            languages,
            settings_store,
            account_service,
        })
    }

    pub fn settings_domain(&self) -> SettingsDomain {
        SettingsDomain::new(
            Arc::clone(&self.languages),
            Arc::clone(&self.settings_store),
            Arc::clone(&self.account_service),
        )
    }

    pub fn drawer(&self) -> DrawerModel {
        DrawerModel::new(self.account_service.account_count())
    }
}

impl std::fmt::Debug for ClientComposition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientComposition")
            .field("device", &self.device)
            .field("style", &self.style)
            .field("languages", &self.languages.len())
            .finish_non_exhaustive()
    }
}
