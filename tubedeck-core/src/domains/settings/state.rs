use std::fmt;

/// Preference domain shown by a selector screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectorKind {
    Language,
    PlayerEngine,
    PlaybackTransport,
    Tracking,
}

impl SelectorKind {
    pub const ALL: [SelectorKind; 4] = [
        Self::Language,
        Self::PlayerEngine,
        Self::PlaybackTransport,
        Self::Tracking,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Language => "LanguageSelector",
            Self::PlayerEngine => "PlayerSelector",
            Self::PlaybackTransport => "PlayerResolutionSelector",
            Self::Tracking => "TrackingSelector",
        }
    }
}

impl fmt::Display for SelectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Current settings view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SettingsView {
    #[default]
    Main,
    Selector(SelectorKind),
}

/// Account button on the overview
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountAction {
    ClearAllData,
    Logout,
}
