use serde::{Deserialize, Serialize};

/// Partial update for [`AppSettings`](crate::AppSettings)
///
/// Only fields that are `Some` are written by the store. Serializes with the
/// same camelCase names as the record and omits absent fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hls_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_hls_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vlc_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub own_overlay_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_selected: Option<String>,
}

impl SettingsPatch {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_hls_enabled(mut self, value: bool) -> Self {
        self.hls_enabled = Some(value);
        self
    }

    #[must_use]
    pub fn with_local_hls_enabled(mut self, value: bool) -> Self {
        self.local_hls_enabled = Some(value);
        self
    }

    #[must_use]
    pub fn with_vlc_enabled(mut self, value: bool) -> Self {
        self.vlc_enabled = Some(value);
        self
    }

    #[must_use]
    pub fn with_own_overlay_enabled(mut self, value: bool) -> Self {
        self.own_overlay_enabled = Some(value);
        self
    }

    #[must_use]
    pub fn with_tracking_enabled(mut self, value: bool) -> Self {
        self.tracking_enabled = Some(value);
        self
    }

    #[must_use]
    pub fn with_language_selected(mut self, code: impl Into<String>) -> Self {
        self.language_selected = Some(code.into());
        self
    }

    /// True when applying this patch would change nothing
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
