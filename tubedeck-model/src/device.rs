use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse runtime category of the device the client is running on
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
    /// Phones and tablets, touch driven
    #[default]
    Handheld,
    /// Television-class devices, focus driven, viewed from a distance
    Tv,
}

impl DeviceClass {
    /// Map the platform's "is TV" flag onto a device class
    pub fn from_is_tv(is_tv: bool) -> Self {
        if is_tv { Self::Tv } else { Self::Handheld }
    }

    pub fn is_tv(self) -> bool {
        matches!(self, Self::Tv)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Handheld => "Handheld",
            Self::Tv => "TV",
        }
    }
}

impl fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_is_tv() {
        assert_eq!(DeviceClass::from_is_tv(true), DeviceClass::Tv);
        assert_eq!(DeviceClass::from_is_tv(false), DeviceClass::Handheld);
        assert!(DeviceClass::Tv.is_tv());
        assert!(!DeviceClass::Handheld.is_tv());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&DeviceClass::Tv).unwrap();
        assert_eq!(json, "\"tv\"");
        let parsed: DeviceClass = serde_json::from_str("\"handheld\"").unwrap();
        assert_eq!(parsed, DeviceClass::Handheld);
    }
}
