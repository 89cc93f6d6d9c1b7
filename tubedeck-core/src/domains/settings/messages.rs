use tubedeck_model::prelude::{LanguageTable, SettingsPatch};

use super::state::{AccountAction, SelectorKind};
use crate::preferences::{
    PlaybackTransport, PlayerEngine, Preference, Tracking, language_patch,
};

/// Option picked on a selector screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Language code; must exist in the language table
    Language(String),
    PlayerEngine(PlayerEngine),
    PlaybackTransport(PlaybackTransport),
    Tracking(Tracking),
}

impl Selection {
    /// Parse a selector item key; `None` when `key` is not an option of `kind`
    pub fn from_key(
        kind: SelectorKind,
        key: &str,
        languages: &LanguageTable,
    ) -> Option<Self> {
        match kind {
            SelectorKind::Language => languages
                .get(key)
                .map(|language| Self::Language(language.code.clone())),
            SelectorKind::PlayerEngine => {
                PlayerEngine::from_key(key).map(Self::PlayerEngine)
            }
            SelectorKind::PlaybackTransport => {
                PlaybackTransport::from_key(key).map(Self::PlaybackTransport)
            }
            SelectorKind::Tracking => {
                Tracking::from_key(key).map(Self::Tracking)
            }
        }
    }

    pub fn kind(&self) -> SelectorKind {
        match self {
            Self::Language(_) => SelectorKind::Language,
            Self::PlayerEngine(_) => SelectorKind::PlayerEngine,
            Self::PlaybackTransport(_) => SelectorKind::PlaybackTransport,
            Self::Tracking(_) => SelectorKind::Tracking,
        }
    }

    /// Patch that selects this option; `None` for a language code the table
    /// does not know
    pub fn patch(&self, languages: &LanguageTable) -> Option<SettingsPatch> {
        match self {
            Self::Language(code) => languages.get(code).map(language_patch),
            Self::PlayerEngine(engine) => Some(engine.patch()),
            Self::PlaybackTransport(transport) => Some(transport.patch()),
            Self::Tracking(tracking) => Some(tracking.patch()),
        }
    }
}

/// Messages for the settings domain
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsMessage {
    // Navigation
    OpenSelector(SelectorKind),
    BackToMain,

    // Preferences
    Select(Selection),

    // Account
    Account(AccountAction),
}

impl SettingsMessage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::OpenSelector(_) => "Settings::OpenSelector",
            Self::BackToMain => "Settings::BackToMain",
            Self::Select(Selection::Language(_)) => "Settings::SelectLanguage",
            Self::Select(Selection::PlayerEngine(_)) => {
                "Settings::SelectPlayerEngine"
            }
            Self::Select(Selection::PlaybackTransport(_)) => {
                "Settings::SelectPlaybackTransport"
            }
            Self::Select(Selection::Tracking(_)) => "Settings::SelectTracking",
            Self::Account(AccountAction::ClearAllData) => {
                "Settings::ClearAllData"
            }
            Self::Account(AccountAction::Logout) => "Settings::Logout",
        }
    }
}

impl std::fmt::Display for SettingsMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
