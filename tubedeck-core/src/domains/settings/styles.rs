//! Row and section styles of the settings screens
//!
//! Handheld renders flat grouped rows under an uppercase caption. TV renders
//! each row as a raised card with larger type.

use crate::design_tokens::{Color, Shadow, StyleContext};

/// Card surface drawn behind a row on TV
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardStyle {
    pub background: Color,
    pub radius: f32,
    pub margin_horizontal: f32,
    pub margin_vertical: f32,
    pub shadow: Option<Shadow>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowStyle {
    pub card: Option<CardStyle>,
    pub padding: f32,
    pub min_height: f32,
    pub icon_badge_size: f32,
    pub icon_badge_radius: f32,
    pub icon_size: f32,
    pub label_font_size: f32,
    pub label_color: Color,
    pub value_font_size: f32,
    pub value_color: Color,
    /// Check mark / chevron at the end of the row
    pub accessory_size: f32,
    pub accessory_color: Color,
}

impl RowStyle {
    pub fn for_context(context: &StyleContext) -> Self {
        let tokens = context.tokens();
        let palette = context.palette();

        let card = context.is_expanded().then(|| CardStyle {
            background: palette.card_background,
            radius: tokens.card_radius,
            margin_horizontal: tokens.card_margin,
            margin_vertical: tokens.row_gap(),
            shadow: tokens.shadow(palette.shadow),
        });

        Self {
            card,
            padding: tokens.card_padding,
            min_height: tokens.min_row_height,
            icon_badge_size: tokens.icon_badge_size,
            icon_badge_radius: tokens.icon_badge_radius,
            icon_size: tokens.icon_size,
            label_font_size: tokens.body_font_size,
            label_color: palette.text,
            value_font_size: tokens.caption_font_size,
            value_color: palette.value_text,
            accessory_size: tokens.accessory_icon_size(),
            accessory_color: palette.accessory,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionStyle {
    pub padding_top: f32,
    pub padding_horizontal: f32,
    pub title_font_size: f32,
    pub title_margin_horizontal: f32,
    pub title_margin_vertical: f32,
    pub title_uppercase: bool,
    pub title_letter_spacing: f32,
    /// Handheld groups rows in a bordered, indented body
    pub bordered_body: bool,
    pub body_indent: f32,
    /// Bottom padding when the section list scrolls (TV)
    pub scroll_bottom_padding: Option<f32>,
}

impl SectionStyle {
    pub fn for_context(context: &StyleContext) -> Self {
        let tokens = context.tokens();
        if context.is_expanded() {
            Self {
                padding_top: tokens.card_margin * 2.0,
                padding_horizontal: tokens.card_margin,
                title_font_size: tokens.header_font_size,
                title_margin_horizontal: tokens.card_margin,
                title_margin_vertical: tokens.card_margin,
                title_uppercase: false,
                title_letter_spacing: 0.0,
                bordered_body: false,
                body_indent: 0.0,
                scroll_bottom_padding: Some(tokens.list_bottom_padding()),
            }
        } else {
            Self {
                padding_top: 12.0,
                padding_horizontal: 0.0,
                title_font_size: tokens.header_font_size,
                title_margin_horizontal: 24.0,
                title_margin_vertical: tokens.card_margin,
                title_uppercase: true,
                title_letter_spacing: 1.2,
                bordered_body: true,
                body_indent: 24.0,
                scroll_bottom_padding: None,
            }
        }
    }
}
