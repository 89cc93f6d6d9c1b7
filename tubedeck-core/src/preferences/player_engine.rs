use std::fmt;

use serde::{Deserialize, Serialize};
use tubedeck_model::{AppSettings, SettingsPatch};

use super::Preference;

/// Playback engine used by the video screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlayerEngine {
    /// Platform player with its own controls
    Native,
    /// Platform player with our controls drawn on top
    NativeOverlay,
    /// Embedded VLC
    Vlc,
}

impl Preference for PlayerEngine {
    const ALL: &'static [Self] = &[Self::Native, Self::NativeOverlay, Self::Vlc];

    const TITLE: &'static str = "Player Types";

    fn key(self) -> &'static str {
        match self {
            Self::Native => "native",
            Self::NativeOverlay => "native-overlay",
            Self::Vlc => "vlc",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Native => "Native",
            Self::NativeOverlay => "Native Overlay (Alpha)",
            Self::Vlc => "VLC",
        }
    }

    /// VLC beats the overlay flag, which beats plain native
    fn resolve(settings: &AppSettings) -> Self {
        if settings.vlc_enabled {
            Self::Vlc
        } else if settings.own_overlay_enabled {
            Self::NativeOverlay
        } else {
            Self::Native
        }
    }

    fn patch(self) -> SettingsPatch {
        SettingsPatch::new()
            .with_vlc_enabled(self == Self::Vlc)
            .with_own_overlay_enabled(self == Self::NativeOverlay)
    }
}

impl fmt::Display for PlayerEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

pub fn resolve_player_engine(settings: &AppSettings) -> PlayerEngine {
    PlayerEngine::resolve(settings)
}
