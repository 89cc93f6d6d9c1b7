//! Layout tokens for settings rows, sections and cards

use super::palette::Color;

/// Drop shadow of a raised card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    pub color: Color,
    pub opacity: f32,
    pub radius: f32,
    pub elevation: f32,
}

/// Layout constants for one device class
///
/// ## Token Values
///
/// | Token               | Compact | Expanded | Typical Usage                 |
/// |---------------------|---------|----------|-------------------------------|
/// | `card_padding`      | 12      | 32       | Row inner padding             |
/// | `card_margin`       | 8       | 16       | Row/section outer margin      |
/// | `card_radius`       | 4       | 16       | Row card corners              |
/// | `icon_badge_size`   | 30      | 42       | Colored square behind icons   |
/// | `icon_badge_radius` | 4       | 8        | Icon badge corners            |
/// | `header_font_size`  | 14      | 32       | Section titles                |
/// | `body_font_size`    | 17      | 20       | Row labels                    |
/// | `caption_font_size` | 17      | 16       | Row values                    |
/// | `icon_size`         | 20      | 36       | Row icons                     |
/// | `min_row_height`    | 50      | 80       | Focus/touch target            |
/// | `shadow_opacity`    | 0.0     | 0.3      | Card shadow                   |
/// | `shadow_radius`     | 0       | 8        | Card shadow blur              |
/// | `elevation`         | 0       | 8        | Card elevation                |
/// | `focus_scale`       | 1.0     | 1.05     | Scale of the focused element  |
/// | `focus_opacity`     | 1.0     | 0.8      | Opacity of the focused element|
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleTokens {
    pub card_padding: f32,
    pub card_margin: f32,
    pub card_radius: f32,
    pub icon_badge_size: f32,
    pub icon_badge_radius: f32,
    pub header_font_size: f32,
    pub body_font_size: f32,
    pub caption_font_size: f32,
    pub icon_size: f32,
    pub min_row_height: f32,
    pub shadow_opacity: f32,
    pub shadow_radius: f32,
    pub elevation: f32,
    pub focus_scale: f32,
    pub focus_opacity: f32,
}

impl StyleTokens {
    /// Handheld layout
    pub const COMPACT: Self = Self {
        card_padding: 12.0,
        card_margin: 8.0,
        card_radius: 4.0,
        icon_badge_size: 30.0,
        icon_badge_radius: 4.0,
        header_font_size: 14.0,
        body_font_size: 17.0,
        caption_font_size: 17.0,
        icon_size: 20.0,
        min_row_height: 50.0,
        shadow_opacity: 0.0,
        shadow_radius: 0.0,
        elevation: 0.0,
        focus_scale: 1.0,
        focus_opacity: 1.0,
    };

    /// 10-foot TV layout
    pub const EXPANDED: Self = Self {
        card_padding: 32.0,
        card_margin: 16.0,
        card_radius: 16.0,
        icon_badge_size: 42.0,
        icon_badge_radius: 8.0,
        header_font_size: 32.0,
        body_font_size: 20.0,
        caption_font_size: 16.0,
        icon_size: 36.0,
        min_row_height: 80.0,
        shadow_opacity: 0.3,
        shadow_radius: 8.0,
        elevation: 8.0,
        focus_scale: 1.05,
        focus_opacity: 0.8,
    };

    /// Check/chevron glyph size at the end of a row
    pub fn accessory_icon_size(&self) -> f32 {
        if self.icon_size > Self::COMPACT.icon_size {
            self.icon_size - 8.0
        } else {
            self.icon_size
        }
    }

    /// Bottom padding of a scrolling settings list
    pub fn list_bottom_padding(&self) -> f32 {
        self.card_margin * 4.0
    }

    /// Vertical gap between row cards
    pub fn row_gap(&self) -> f32 {
        self.card_margin / 2.0
    }

    /// Card shadow, `None` for flat layouts
    pub fn shadow(&self, color: Color) -> Option<Shadow> {
        (self.elevation > 0.0).then_some(Shadow {
            color,
            opacity: self.shadow_opacity,
            radius: self.shadow_radius,
            elevation: self.elevation,
        })
    }
}

impl Default for StyleTokens {
    fn default() -> Self {
        Self::COMPACT
    }
}
