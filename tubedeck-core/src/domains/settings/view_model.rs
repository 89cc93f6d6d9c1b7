//! Settings screen view models
//!
//! Pure projections of a settings snapshot: the overview with its current
//! value labels, and one selector list per preference domain.

use tubedeck_model::prelude::{AppSettings, LanguageTable};

use super::state::{AccountAction, SelectorKind};
use crate::design_tokens::Color;
use crate::preferences::{
    PlaybackTransport, PlayerEngine, Preference, Tracking, language_option,
    resolve_language,
};

/// What pressing a row does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowTarget {
    Selector(SelectorKind),
    Action(AccountAction),
}

/// One row of the overview
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsRow {
    /// Feather icon name
    pub icon: &'static str,
    pub icon_background: Color,
    pub label: &'static str,
    /// Current value label; buttons have none
    pub value: Option<String>,
    pub target: RowTarget,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SettingsSection {
    pub title: &'static str,
    pub rows: Vec<SettingsRow>,
}

/// Settings overview: a "General" section of selector rows and an "Account"
/// section of buttons
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsOverview {
    pub sections: Vec<SettingsSection>,
}

const ORANGE: Color = Color::from_rgb8(0xfe, 0x94, 0x00);
const BLUE: Color = Color::from_rgb8(0x00, 0x00, 0xff);
const YELLOW: Color = Color::from_rgb8(0xf5, 0xd1, 0x32);
const GREEN: Color = Color::from_rgb8(0x32, 0xa8, 0x52);
const RED: Color = Color::from_rgb8(0xff, 0x33, 0x33);
const GREY: Color = Color::from_rgb8(0x66, 0x66, 0x66);

impl SettingsOverview {
    pub fn build(settings: &AppSettings, languages: &LanguageTable) -> Self {
        let general = SettingsSection {
            title: "General",
            rows: vec![
                SettingsRow {
                    icon: "globe",
                    icon_background: ORANGE,
                    label: "Language",
                    value: Some(
                        resolve_language(settings, languages).label.clone(),
                    ),
                    target: RowTarget::Selector(SelectorKind::Language),
                },
                SettingsRow {
                    icon: "play-circle",
                    icon_background: BLUE,
                    label: "Video player",
                    value: Some(
                        PlayerEngine::resolve(settings).label().to_string(),
                    ),
                    target: RowTarget::Selector(SelectorKind::PlayerEngine),
                },
                SettingsRow {
                    icon: "settings",
                    icon_background: YELLOW,
                    label: "Video resolution variant",
                    value: Some(
                        PlaybackTransport::resolve(settings).label().to_string(),
                    ),
                    target: RowTarget::Selector(
                        SelectorKind::PlaybackTransport,
                    ),
                },
                SettingsRow {
                    icon: "clock",
                    icon_background: GREEN,
                    label: "History enabled",
                    value: Some(
                        Tracking::resolve(settings)
                            .overview_value()
                            .to_string(),
                    ),
                    target: RowTarget::Selector(SelectorKind::Tracking),
                },
            ],
        };

        let account = SettingsSection {
            title: "Account",
            rows: vec![
                SettingsRow {
                    icon: "trash-2",
                    icon_background: RED,
                    label: "Clear all",
                    value: None,
                    target: RowTarget::Action(AccountAction::ClearAllData),
                },
                SettingsRow {
                    icon: "log-out",
                    icon_background: GREY,
                    label: "Logout",
                    value: None,
                    target: RowTarget::Action(AccountAction::Logout),
                },
            ],
        };

        Self {
            sections: vec![general, account],
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &SettingsRow> {
        self.sections.iter().flat_map(|section| section.rows.iter())
    }

    /// Row that opens `kind`'s selector
    pub fn row_for(&self, kind: SelectorKind) -> Option<&SettingsRow> {
        self.rows()
            .find(|row| row.target == RowTarget::Selector(kind))
    }
}

/// One option on a selector screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorItem {
    pub key: String,
    pub label: String,
    pub selected: bool,
}

/// Selector screen: every option of one domain, exactly one selected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorList {
    pub kind: SelectorKind,
    pub title: &'static str,
    pub items: Vec<SelectorItem>,
}

pub const LANGUAGE_SELECTOR_TITLE: &str = "Languages";

impl SelectorList {
    pub fn build(
        kind: SelectorKind,
        settings: &AppSettings,
        languages: &LanguageTable,
    ) -> Self {
        match kind {
            SelectorKind::Language => Self::languages(settings, languages),
            SelectorKind::PlayerEngine => {
                Self::for_preference::<PlayerEngine>(kind, settings)
            }
            SelectorKind::PlaybackTransport => {
                Self::for_preference::<PlaybackTransport>(kind, settings)
            }
            SelectorKind::Tracking => {
                Self::for_preference::<Tracking>(kind, settings)
            }
        }
    }

    fn for_preference<P: Preference>(
        kind: SelectorKind,
        settings: &AppSettings,
    ) -> Self {
        let current = P::resolve(settings);
        let items = P::ALL
            .iter()
            .map(|option| SelectorItem {
                key: option.key().to_string(),
                label: option.label().to_string(),
                selected: *option == current,
            })
            .collect();
        Self {
            kind,
            title: P::TITLE,
            items,
        }
    }

    fn languages(settings: &AppSettings, languages: &LanguageTable) -> Self {
        let current = resolve_language(settings, languages);
        let items = languages
            .entries()
            .iter()
            .map(|language| {
                let option = language_option(language);
                SelectorItem {
                    key: option.key.to_string(),
                    label: option.label.to_string(),
                    selected: language.code == current.code,
                }
            })
            .collect();
        Self {
            kind: SelectorKind::Language,
            title: LANGUAGE_SELECTOR_TITLE,
            items,
        }
    }

    pub fn selected(&self) -> Option<&SelectorItem> {
        self.items.iter().find(|item| item.selected)
    }
}
