//! Preference option resolution
//!
//! Each preference domain maps a settings snapshot to exactly one selected
//! option, and maps an option back to the [`SettingsPatch`] that selects it.
//! The two directions share one precedence table per domain, so selecting an
//! option and resolving the patched record always yields that option.
//!
//! Resolution is total: missing, `null` or contradictory fields resolve to a
//! documented default instead of an error.

pub mod language;
pub mod player_engine;
pub mod playback_transport;
pub mod tracking;

pub use language::{language_option, language_patch, resolve_language};
pub use player_engine::{PlayerEngine, resolve_player_engine};
pub use playback_transport::{PlaybackTransport, resolve_playback_transport};
pub use tracking::{Tracking, resolve_tracking};

use std::fmt::Debug;

use tubedeck_model::{AppSettings, SettingsPatch};

/// One selectable value within a preference domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PreferenceOption<'a> {
    /// Unique within its domain
    pub key: &'a str,
    pub label: &'a str,
}

/// A closed preference domain backed by boolean fields of the settings record
pub trait Preference: Debug + Copy + Eq + Sized + 'static {
    /// Every option, in display order
    const ALL: &'static [Self];

    /// Heading of the selector list for this domain
    const TITLE: &'static str;

    fn key(self) -> &'static str;

    fn label(self) -> &'static str;

    /// Option currently selected by `settings`
    fn resolve(settings: &AppSettings) -> Self;

    /// Patch that makes [`resolve`](Self::resolve) return `self`
    fn patch(self) -> SettingsPatch;

    fn option(self) -> PreferenceOption<'static> {
        PreferenceOption {
            key: self.key(),
            label: self.label(),
        }
    }

    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|option| option.key() == key)
    }
}
