//! Drawer geometry and item styling

use crate::design_tokens::{Color, Shadow, StyleContext};

/// Visibility of the navigation drawer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DrawerState {
    Hidden,
    /// Icons only
    #[default]
    Collapsed,
    Open,
}

impl DrawerState {
    pub fn shows_labels(self) -> bool {
        self == Self::Open
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawerLayout {
    pub width: f32,
    pub padding_start: f32,
    pub item_padding: f32,
    pub item_font_size: f32,
    pub label_gap: f32,
    pub icon_size: f32,
    pub show_labels: bool,
    pub background: Color,
    pub shadow: Option<Shadow>,
}

impl DrawerLayout {
    pub fn compute(state: DrawerState, context: &StyleContext) -> Self {
        let drawer = context.drawer();
        let palette = context.palette();

        let width = match state {
            DrawerState::Hidden => 0.0,
            DrawerState::Collapsed => drawer.collapsed_width,
            DrawerState::Open => drawer.open_width,
        };
        let padding_start = match state {
            DrawerState::Hidden => 0.0,
            _ => drawer.start_padding,
        };

        // TV draws the drawer as a raised card over the content
        let (background, shadow) = if context.is_expanded() {
            (
                palette.card_background,
                context.tokens().shadow(palette.shadow),
            )
        } else {
            (palette.drawer_background, None)
        };

        Self {
            width,
            padding_start,
            item_padding: drawer.item_padding,
            item_font_size: drawer.item_font_size,
            label_gap: drawer.label_gap,
            icon_size: drawer.icon_size,
            show_labels: state.shows_labels(),
            background,
            shadow,
        }
    }
}

/// Per-item style, driven by focus on TV
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawerItemStyle {
    pub scale: f32,
    pub opacity: f32,
    pub highlight: Option<Color>,
    pub radius: f32,
    pub margin_horizontal: f32,
    pub text_color: Color,
}

impl DrawerItemStyle {
    pub fn compute(focused: bool, context: &StyleContext) -> Self {
        let tokens = context.tokens();
        let palette = context.palette();

        if focused && context.is_expanded() {
            Self {
                scale: tokens.focus_scale,
                opacity: tokens.focus_opacity,
                highlight: Some(palette.focus_highlight),
                radius: tokens.card_radius / 2.0,
                margin_horizontal: 8.0,
                text_color: palette.text,
            }
        } else {
            Self {
                scale: 1.0,
                opacity: 1.0,
                highlight: None,
                radius: 0.0,
                margin_horizontal: 0.0,
                text_color: palette.text,
            }
        }
    }
}
