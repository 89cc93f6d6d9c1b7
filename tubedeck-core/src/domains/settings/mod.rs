//! Settings domain
//!
//! Holds the settings screen's view state and its collaborators. Rendering
//! reads snapshots through [`SettingsDomain::overview`] and
//! [`SettingsDomain::selector`]; user input arrives as [`SettingsMessage`]s.

pub mod messages;
pub mod state;
pub mod styles;
pub mod update;
pub mod view_model;

pub use messages::{Selection, SettingsMessage};
pub use state::{AccountAction, SelectorKind, SettingsView};
pub use update::SettingsEvent;
pub use view_model::{
    RowTarget, SelectorItem, SelectorList, SettingsOverview, SettingsRow,
    SettingsSection,
};

use std::sync::Arc;

use tracing::warn;
use tubedeck_model::{AppSettings, LanguageTable};

use crate::error::Result;
use crate::services::{AccountService, SettingsStore};

pub struct SettingsDomain {
    pub current_view: SettingsView,
    pub languages: Arc<LanguageTable>,
    pub settings_store: Arc<dyn SettingsStore>,
    pub account_service: Arc<dyn AccountService>,
}

impl SettingsDomain {
    pub fn new(
        languages: Arc<LanguageTable>,
        settings_store: Arc<dyn SettingsStore>,
        account_service: Arc<dyn AccountService>,
    ) -> Self {
        Self {
            current_view: SettingsView::default(),
            languages,
            settings_store,
            account_service,
        }
    }

    /// Current record; an unreadable store reads as the default record
    pub fn snapshot(&self) -> AppSettings {
        self.settings_store.snapshot().unwrap_or_else(|err| {
            warn!("settings unavailable, rendering defaults: {err}");
            AppSettings::default()
        })
    }

    pub fn overview(&self) -> SettingsOverview {
        SettingsOverview::build(&self.snapshot(), &self.languages)
    }

    pub fn selector(&self, kind: SelectorKind) -> SelectorList {
        SelectorList::build(kind, &self.snapshot(), &self.languages)
    }

    /// Selector for the current view, `None` on the main view
    pub fn current_selector(&self) -> Option<SelectorList> {
        match self.current_view {
            SettingsView::Main => None,
            SettingsView::Selector(kind) => Some(self.selector(kind)),
        }
    }

    /// Message a press on `row` produces
    pub fn press(&self, row: &SettingsRow) -> SettingsMessage {
        match row.target {
            RowTarget::Selector(kind) => SettingsMessage::OpenSelector(kind),
            RowTarget::Action(action) => SettingsMessage::Account(action),
        }
    }

    /// Message a press on the selector item `key` produces
    pub fn press_item(
        &self,
        kind: SelectorKind,
        key: &str,
    ) -> Option<SettingsMessage> {
        Selection::from_key(kind, key, &self.languages)
            .map(SettingsMessage::Select)
    }

    pub fn update(&mut self, message: SettingsMessage) -> Result<SettingsEvent> {
        update::handle_message(self, message)
    }
}

impl std::fmt::Debug for SettingsDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsDomain")
            .field("current_view", &self.current_view)
            .field("languages", &self.languages.len())
            .field("settings_store", &"SettingsStore(..)")
            .field("account_service", &"AccountService(..)")
            .finish()
    }
}
