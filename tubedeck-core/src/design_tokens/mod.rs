//! Device-class design tokens
//!
//! Layout constants come in two immutable variants: compact for handheld
//! devices and expanded for TV-class devices. Which one applies is decided by
//! the [`DeviceClass`] injected once at the composition root and passed in
//! explicitly; nothing in this module queries the platform.
//!
//! ## Architecture
//!
//! - [`StyleTokens`] - Row, section and card layout constants
//! - [`DrawerTokens`] - Navigation drawer dimensions
//! - [`Palette`] - Dark surface colors
//! - [`TokenSet`] - Style and drawer tokens of one device class
//! - [`StyleConfig`] - The compact set plus an optional expanded set
//! - [`StyleContext`] - Style config bound to a device class; the value views
//!   take as input
//!
//! ## Usage
//!
//! ```rust
//! use tubedeck_core::design_tokens::{StyleContext, current_style_tokens};
//! use tubedeck_model::DeviceClass;
//!
//! let tokens = current_style_tokens(true);
//! assert_eq!(tokens.icon_size, 36.0);
//!
//! let context = StyleContext::builtin(DeviceClass::Handheld);
//! assert_eq!(context.font_size(20.0), 20.0);
//! ```

pub mod drawer;
pub mod palette;
pub mod style;

pub use drawer::DrawerTokens;
pub use palette::{Color, Palette};
pub use style::{Shadow, StyleTokens};

use tubedeck_model::DeviceClass;

/// TV multiplier applied by [`StyleContext::font_size`]
pub const TV_FONT_MULTIPLIER: f32 = 1.3;

/// TV multiplier applied by [`StyleContext::spacing`]
pub const TV_SPACING_MULTIPLIER: f32 = 1.5;

/// TV multiplier applied by [`StyleContext::icon_size`] without an override
pub const TV_ICON_MULTIPLIER: f32 = 1.5;

/// Layout tokens for one device class: rows, sections and the drawer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TokenSet {
    pub style: StyleTokens,
    pub drawer: DrawerTokens,
}

impl TokenSet {
    pub const COMPACT: Self = Self {
        style: StyleTokens::COMPACT,
        drawer: DrawerTokens::COMPACT,
    };

    pub const EXPANDED: Self = Self {
        style: StyleTokens::EXPANDED,
        drawer: DrawerTokens::EXPANDED,
    };
}

/// Token sets available to this build
///
/// The expanded set is optional: a build or configuration without TV support
/// leaves it out, and TV-class devices then get the compact set rather than
/// undefined layout values. Style and drawer tokens are swapped together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleConfig {
    pub compact: TokenSet,
    pub expanded: Option<TokenSet>,
}

static BUILTIN: StyleConfig = StyleConfig::BUILTIN;

impl StyleConfig {
    /// Both variants available
    pub const BUILTIN: Self = Self {
        compact: TokenSet::COMPACT,
        expanded: Some(TokenSet::EXPANDED),
    };

    /// Compact only
    pub const COMPACT_ONLY: Self = Self {
        compact: TokenSet::COMPACT,
        expanded: None,
    };

    pub fn builtin() -> &'static StyleConfig {
        &BUILTIN
    }

    /// Built-in config, with or without the expanded variant
    pub fn with_expanded(expanded: bool) -> Self {
        if expanded {
            Self::BUILTIN
        } else {
            Self::COMPACT_ONLY
        }
    }

    /// Token set laid out for `device`
    pub fn token_set(&self, device: DeviceClass) -> &TokenSet {
        match device {
            DeviceClass::Tv => self.expanded.as_ref().unwrap_or(&self.compact),
            DeviceClass::Handheld => &self.compact,
        }
    }

    pub fn tokens(&self, device: DeviceClass) -> &StyleTokens {
        &self.token_set(device).style
    }

    pub fn drawer(&self, device: DeviceClass) -> &DrawerTokens {
        &self.token_set(device).drawer
    }

    /// Device class the returned tokens are actually laid out for
    pub fn effective_device(&self, device: DeviceClass) -> DeviceClass {
        match device {
            DeviceClass::Tv if self.expanded.is_some() => DeviceClass::Tv,
            _ => DeviceClass::Handheld,
        }
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self::BUILTIN
    }
}

/// Token set for the given device-class flag, from the built-in config
pub fn current_style_tokens(device_is_tv: bool) -> &'static StyleTokens {
    BUILTIN.tokens(DeviceClass::from_is_tv(device_is_tv))
}

/// Style configuration bound to the process's device class
///
/// Built once at the composition root and handed to every view model that
/// lays something out. Copyable; holds no mutable state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleContext {
    device: DeviceClass,
    config: StyleConfig,
}

impl StyleContext {
    pub fn new(device: DeviceClass, config: StyleConfig) -> Self {
        Self { device, config }
    }

    pub fn builtin(device: DeviceClass) -> Self {
        Self::new(device, StyleConfig::BUILTIN)
    }

    /// True when expanded tokens are in effect, i.e. the device is TV-class
    /// and the expanded set is available
    pub fn is_expanded(&self) -> bool {
        self.config.effective_device(self.device).is_tv()
    }

    pub fn tokens(&self) -> &StyleTokens {
        self.config.tokens(self.device)
    }

    pub fn drawer(&self) -> &DrawerTokens {
        self.config.drawer(self.device)
    }

    pub fn palette(&self) -> Palette {
        Palette::dark(self.config.effective_device(self.device))
    }

    /// Font size for `base`, enlarged on TV
    pub fn font_size(&self, base: f32) -> f32 {
        if self.is_expanded() {
            (base * TV_FONT_MULTIPLIER).round()
        } else {
            base
        }
    }

    /// Spacing for `base`, enlarged on TV
    pub fn spacing(&self, base: f32) -> f32 {
        if self.is_expanded() {
            (base * TV_SPACING_MULTIPLIER).round()
        } else {
            base
        }
    }

    /// Icon size for `base`; on TV `tv_size` wins when given
    pub fn icon_size(&self, base: f32, tv_size: Option<f32>) -> f32 {
        if self.is_expanded() {
            tv_size.unwrap_or_else(|| (base * TV_ICON_MULTIPLIER).round())
        } else {
            base
        }
    }
}

impl Default for StyleContext {
    fn default() -> Self {
        Self::builtin(DeviceClass::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_style_tokens() {
        assert_eq!(current_style_tokens(true), &StyleTokens::EXPANDED);
        assert_eq!(current_style_tokens(false), &StyleTokens::COMPACT);
    }

    #[test]
    fn test_current_style_tokens_is_stable() {
        assert!(std::ptr::eq(
            current_style_tokens(true),
            current_style_tokens(true)
        ));
        assert!(std::ptr::eq(
            current_style_tokens(false),
            current_style_tokens(false)
        ));
    }

    #[test]
    fn test_missing_expanded_falls_back_to_compact() {
        let config = StyleConfig::COMPACT_ONLY;
        assert_eq!(config.tokens(DeviceClass::Tv), &StyleTokens::COMPACT);
        assert_eq!(config.drawer(DeviceClass::Tv), &DrawerTokens::COMPACT);
        assert_eq!(config.effective_device(DeviceClass::Tv), DeviceClass::Handheld);
    }

    #[test]
    fn test_handheld_never_gets_expanded() {
        let config = StyleConfig::BUILTIN;
        assert_eq!(config.tokens(DeviceClass::Handheld), &StyleTokens::COMPACT);
        assert_eq!(
            config.drawer(DeviceClass::Handheld),
            &DrawerTokens::COMPACT
        );
    }

    #[test]
    fn test_scaling_helpers_on_tv() {
        let context = StyleContext::builtin(DeviceClass::Tv);
        assert!((context.font_size(20.0) - 26.0).abs() < 0.001);
        assert!((context.spacing(15.0) - 23.0).abs() < 0.001); // 22.5 rounds up
        assert!((context.icon_size(20.0, None) - 30.0).abs() < 0.001);
        assert!((context.icon_size(20.0, Some(36.0)) - 36.0).abs() < 0.001);
    }

    #[test]
    fn test_scaling_helpers_on_handheld() {
        let context = StyleContext::builtin(DeviceClass::Handheld);
        assert!((context.font_size(17.0) - 17.0).abs() < 0.001);
        assert!((context.spacing(15.0) - 15.0).abs() < 0.001);
        assert!((context.icon_size(20.0, Some(36.0)) - 20.0).abs() < 0.001);
    }

    #[test]
    fn test_tv_without_expanded_tokens_behaves_like_handheld() {
        let context =
            StyleContext::new(DeviceClass::Tv, StyleConfig::COMPACT_ONLY);
        assert!(!context.is_expanded());
        assert_eq!(context.tokens(), &StyleTokens::COMPACT);
        assert!((context.font_size(20.0) - 20.0).abs() < 0.001);
        assert_eq!(context.palette(), Palette::dark(DeviceClass::Handheld));
    }

    #[test]
    fn test_compact_only_tv_never_mixes_sets() {
        let context =
            StyleContext::new(DeviceClass::Tv, StyleConfig::COMPACT_ONLY);
        assert_eq!(context.tokens(), &StyleTokens::COMPACT);
        assert_eq!(context.drawer(), &DrawerTokens::COMPACT);
        assert_eq!(context.palette(), Palette::dark(DeviceClass::Handheld));
    }

    #[test]
    fn test_expanded_set_swaps_style_and_drawer_together() {
        let config = StyleConfig {
            compact: TokenSet::COMPACT,
            expanded: Some(TokenSet {
                style: StyleTokens::EXPANDED,
                drawer: DrawerTokens::COMPACT,
            }),
        };
        let context = StyleContext::new(DeviceClass::Tv, config);
        assert!(context.is_expanded());
        assert_eq!(context.tokens(), &StyleTokens::EXPANDED);
        assert_eq!(context.drawer(), &DrawerTokens::COMPACT);
        assert_eq!(context.palette(), Palette::dark(DeviceClass::Tv));

        let handheld = StyleContext::new(DeviceClass::Handheld, config);
        assert_eq!(handheld.tokens(), &StyleTokens::COMPACT);
        assert_eq!(handheld.drawer(), &DrawerTokens::COMPACT);
    }
}
