use std::fmt;

use serde::{Deserialize, Serialize};
use tubedeck_model::{AppSettings, SettingsPatch};

use super::Preference;

/// How video is fetched: progressive HTTP or HLS, optionally through the
/// on-device HLS proxy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlaybackTransport {
    Http,
    Hls,
    HlsLocal,
}

impl Preference for PlaybackTransport {
    const ALL: &'static [Self] = &[Self::Http, Self::Hls, Self::HlsLocal];

    const TITLE: &'static str = "Player Resolution Variant";

    fn key(self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Hls => "hls",
            Self::HlsLocal => "hls-local",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Http => "HTTP",
            Self::Hls => "HLS",
            Self::HlsLocal => "HLS Local",
        }
    }

    /// HLS is checked before local HLS; a record with both set reads as HLS
    fn resolve(settings: &AppSettings) -> Self {
        if settings.hls_enabled {
            Self::Hls
        } else if settings.local_hls_enabled {
            Self::HlsLocal
        } else {
            Self::Http
        }
    }

    fn patch(self) -> SettingsPatch {
        SettingsPatch::new()
            .with_hls_enabled(self == Self::Hls)
            .with_local_hls_enabled(self == Self::HlsLocal)
    }
}

impl fmt::Display for PlaybackTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

pub fn resolve_playback_transport(settings: &AppSettings) -> PlaybackTransport {
    PlaybackTransport::resolve(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::test_support::{
        assert_round_trip, assert_serde_names_match_keys,
        assert_unique_keys,
    };

    fn transport(hls: bool, local: bool) -> PlaybackTransport {
        resolve_playback_transport(&AppSettings {
            hls_enabled: hls,
            local_hls_enabled: local,
            ..Default::default()
        })
    }

    #[test]
    fn test_precedence_table() {
        assert_eq!(transport(false, false), PlaybackTransport::Http);
        assert_eq!(transport(true, false), PlaybackTransport::Hls);
        assert_eq!(transport(false, true), PlaybackTransport::HlsLocal);
    }

    #[test]
    fn test_dual_set_resolves_to_hls() {
        assert_eq!(transport(true, true), PlaybackTransport::Hls);
    }

    #[test]
    fn test_selecting_repairs_dual_set() {
        let settings = AppSettings {
            hls_enabled: true,
            local_hls_enabled: true,
            ..Default::default()
        }
        .patched(&PlaybackTransport::HlsLocal.patch());

        assert!(!settings.hls_enabled);
        assert!(settings.local_hls_enabled);
    }

    #[test]
    fn test_http_patch_clears_both() {
        assert_eq!(
            PlaybackTransport::Http.patch(),
            SettingsPatch::new()
                .with_hls_enabled(false)
                .with_local_hls_enabled(false)
        );
    }

    #[test]
    fn test_round_trip() {
        assert_round_trip::<PlaybackTransport>();
    }

    #[test]
    fn test_keys() {
        assert_unique_keys::<PlaybackTransport>();
        assert_serde_names_match_keys::<PlaybackTransport>();
    }
}
