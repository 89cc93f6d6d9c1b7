use std::fmt;

use serde::{Deserialize, Serialize};
use tubedeck_model::{AppSettings, SettingsPatch};

use super::Preference;

/// Whether watch history is recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tracking {
    Enabled,
    Disabled,
}

impl Tracking {
    pub fn is_enabled(self) -> bool {
        self == Self::Enabled
    }

    /// Value shown next to "History enabled" on the settings overview
    pub fn overview_value(self) -> &'static str {
        match self {
            Self::Enabled => "True",
            Self::Disabled => "False",
        }
    }
}

impl Preference for Tracking {
    const ALL: &'static [Self] = &[Self::Enabled, Self::Disabled];

    const TITLE: &'static str = "Video Tracking";

    fn key(self) -> &'static str {
        match self {
            Self::Enabled => "enabled",
            Self::Disabled => "disabled",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Enabled => "Enabled",
            Self::Disabled => "Disabled",
        }
    }

    fn resolve(settings: &AppSettings) -> Self {
        if settings.tracking_enabled {
            Self::Enabled
        } else {
            Self::Disabled
        }
    }

    fn patch(self) -> SettingsPatch {
        SettingsPatch::new().with_tracking_enabled(self.is_enabled())
    }
}

impl fmt::Display for Tracking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

pub fn resolve_tracking(settings: &AppSettings) -> Tracking {
    Tracking::resolve(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::test_support::{
        assert_round_trip, assert_serde_names_match_keys,
        assert_unique_keys,
    };

    #[test]
    fn test_undefined_is_disabled() {
        let settings: AppSettings =
            serde_json::from_str(r#"{ "trackingEnabled": null }"#).unwrap();
        assert_eq!(resolve_tracking(&settings), Tracking::Disabled);
    }

    #[test]
    fn test_enabled() {
        let settings = AppSettings {
            tracking_enabled: true,
            ..Default::default()
        };
        assert_eq!(resolve_tracking(&settings), Tracking::Enabled);
        assert_eq!(Tracking::Enabled.overview_value(), "True");
        assert_eq!(Tracking::Disabled.overview_value(), "False");
    }

    #[test]
    fn test_round_trip() {
        assert_round_trip::<Tracking>();
    }

    #[test]
    fn test_keys() {
        assert_unique_keys::<Tracking>();
        assert_serde_names_match_keys::<Tracking>();
    }
}
