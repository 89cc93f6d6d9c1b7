//! Dark palette used by the settings and drawer surfaces

use tubedeck_model::DeviceClass;

/// Straight-alpha sRGB color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Self = Self::from_rgb8(0x00, 0x00, 0x00);
    pub const WHITE: Self = Self::from_rgb8(0xff, 0xff, 0xff);

    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, 0xff)
    }

    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    #[must_use]
    pub const fn with_alpha(mut self, a: f32) -> Self {
        self.a = a;
        self
    }
}

/// Surface colors for one device class
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub text: Color,
    pub inverted_text: Color,
    pub background: Color,
    pub background_translucent: Color,
    pub card_background: Color,
    pub shadow: Color,
    pub value_text: Color,
    pub accessory: Color,
    pub drawer_background: Color,
    /// Fill behind a focused drawer item on TV
    pub focus_highlight: Color,
}

impl Palette {
    const DARK_BASE: Self = Self {
        text: Color::WHITE,
        inverted_text: Color::BLACK,
        background: Color::BLACK,
        background_translucent: Color::from_rgba8(0x11, 0x11, 0x11, 0xcc),
        card_background: Color::from_rgb8(0x11, 0x11, 0x11),
        shadow: Color::BLACK,
        value_text: Color::from_rgb8(0x8b, 0x8b, 0x8b),
        accessory: Color::from_rgb8(0xc6, 0xc6, 0xc6),
        drawer_background: Color::from_rgb8(0x33, 0x33, 0x33),
        focus_highlight: Color::WHITE.with_alpha(0.1),
    };

    pub const fn dark(device: DeviceClass) -> Self {
        match device {
            DeviceClass::Handheld => Self::DARK_BASE,
            DeviceClass::Tv => Self {
                card_background: Color::from_rgb8(0x1c, 0x1c, 0x1e),
                ..Self::DARK_BASE
            },
        }
    }
}
