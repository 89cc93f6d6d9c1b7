/// Navigation drawer dimensions for one device class
///
/// | Token              | Compact | Expanded |
/// |--------------------|---------|----------|
/// | `open_width`       | 300     | 400      |
/// | `collapsed_width`  | 150     | 200      |
/// | `start_padding`    | 40      | 60       |
/// | `item_padding`     | 20      | 24       |
/// | `item_font_size`   | 20      | 22       |
/// | `label_gap`        | 15      | 20       |
/// | `icon_size`        | 30      | 36       |
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawerTokens {
    pub open_width: f32,
    pub collapsed_width: f32,
    pub start_padding: f32,
    pub item_padding: f32,
    pub item_font_size: f32,
    /// Space between an item's icon and its label
    pub label_gap: f32,
    pub icon_size: f32,
}

impl DrawerTokens {
    pub const COMPACT: Self = Self {
        open_width: 300.0,
        collapsed_width: 150.0,
        start_padding: 40.0,
        item_padding: 20.0,
        item_font_size: 20.0,
        label_gap: 15.0,
        icon_size: 30.0,
    };

    pub const EXPANDED: Self = Self {
        open_width: 400.0,
        collapsed_width: 200.0,
        start_padding: 60.0,
        item_padding: 24.0,
        item_font_size: 22.0,
        label_gap: 20.0,
        icon_size: 36.0,
    };
}

impl Default for DrawerTokens {
    fn default() -> Self {
        Self::COMPACT
    }
}
