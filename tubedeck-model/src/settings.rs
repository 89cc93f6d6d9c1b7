//! Persisted client settings record
//!
//! The record is owned by whichever store persists it. Readers only ever see
//! snapshots; writes go through [`SettingsPatch`](crate::SettingsPatch).

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::patch::SettingsPatch;

/// Snapshot of the persisted preference fields
///
/// Every field tolerates being absent or `null` in the stored JSON and reads
/// as `false`/`None`. Fields this client does not know about are kept in
/// `extra` so that a read/patch/write cycle does not drop them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppSettings {
    /// Stream over HLS
    #[serde(deserialize_with = "null_as_false")]
    pub hls_enabled: bool,
    /// Stream over HLS served from the on-device proxy
    #[serde(deserialize_with = "null_as_false")]
    pub local_hls_enabled: bool,
    /// Use the VLC engine for playback
    #[serde(deserialize_with = "null_as_false")]
    pub vlc_enabled: bool,
    /// Draw our own controls over the native player
    #[serde(deserialize_with = "null_as_false")]
    pub own_overlay_enabled: bool,
    /// Record watch history
    #[serde(deserialize_with = "null_as_false")]
    pub tracking_enabled: bool,
    /// Interface language code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_selected: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AppSettings {
    /// Write every field present in `patch`, leaving the rest untouched
    pub fn apply(&mut self, patch: &SettingsPatch) {
        if let Some(value) = patch.hls_enabled {
            self.hls_enabled = value;
        }
        if let Some(value) = patch.local_hls_enabled {
            self.local_hls_enabled = value;
        }
        if let Some(value) = patch.vlc_enabled {
            self.vlc_enabled = value;
        }
        if let Some(value) = patch.own_overlay_enabled {
            self.own_overlay_enabled = value;
        }
        if let Some(value) = patch.tracking_enabled {
            self.tracking_enabled = value;
        }
        if let Some(code) = &patch.language_selected {
            self.language_selected = Some(code.clone());
        }
    }

    /// Consuming variant of [`apply`](Self::apply)
    #[must_use]
    pub fn patched(mut self, patch: &SettingsPatch) -> Self {
        self.apply(patch);
        self
    }

    /// Parse a stored record, treating `null` as the default record
    pub fn from_json_value(value: Value) -> serde_json::Result<Self> {
        if value.is_null() {
            return Ok(Self::default());
        }
        serde_json::from_value(value)
    }
}

fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_fields_default_to_false() {
        let settings: AppSettings = serde_json::from_value(json!({})).unwrap();
        assert_eq!(settings, AppSettings::default());
    }

    #[test]
    fn test_null_fields_read_as_false() {
        let settings: AppSettings = serde_json::from_value(json!({
            "trackingEnabled": null,
            "vlcEnabled": null,
            "languageSelected": null,
        }))
        .unwrap();
        assert!(!settings.tracking_enabled);
        assert!(!settings.vlc_enabled);
        assert_eq!(settings.language_selected, None);
    }

    #[test]
    fn test_null_record_is_default() {
        let settings = AppSettings::from_json_value(Value::Null).unwrap();
        assert_eq!(settings, AppSettings::default());
    }

    #[test]
    fn test_unknown_fields_survive_round_trip() {
        let stored = json!({
            "hlsEnabled": true,
            "homeFeedRegion": "DE",
        });
        let settings: AppSettings =
            serde_json::from_value(stored.clone()).unwrap();
        assert!(settings.hls_enabled);
        assert_eq!(settings.extra.get("homeFeedRegion"), Some(&json!("DE")));

        let written = serde_json::to_value(&settings).unwrap();
        assert_eq!(written["homeFeedRegion"], json!("DE"));
        assert_eq!(written["hlsEnabled"], json!(true));
    }

    #[test]
    fn test_apply_only_touches_present_fields() {
        let mut settings = AppSettings {
            tracking_enabled: true,
            language_selected: Some("de".into()),
            ..Default::default()
        };
        let patch = SettingsPatch::new().with_vlc_enabled(true);
        settings.apply(&patch);

        assert!(settings.vlc_enabled);
        assert!(settings.tracking_enabled);
        assert_eq!(settings.language_selected.as_deref(), Some("de"));
    }
}
