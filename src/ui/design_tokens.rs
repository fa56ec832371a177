// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the gallery UI.
//!
//! - **Palette**: base colors
//! - **Opacity**: standardized opacity levels
//! - **Spacing**: spacing scale (8px grid)
//! - **Sizing**: component sizes, including thumbnail-strip metrics
//! - **Typography**: font size scale
//! - **Radius**/**Border**: corner radii and border widths

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.08, 0.08, 0.09);
    pub const GRAY_700: Color = Color::from_rgb(0.22, 0.22, 0.24);
    pub const GRAY_400: Color = Color::from_rgb(0.45, 0.45, 0.48);
    pub const GRAY_200: Color = Color::from_rgb(0.72, 0.72, 0.75);

    /// Accent used for the selected thumbnail highlight and the caption
    /// credit line.
    pub const ACCENT_500: Color = Color::from_rgb(0.95, 0.72, 0.25);
}

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_PRESSED: f32 = 0.9;
}

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

pub mod sizing {
    /// Rendered width and height of one strip thumbnail.
    pub const THUMBNAIL_SIZE: f32 = 88.0;

    /// Horizontal gap between thumbnails.
    pub const THUMBNAIL_SPACING: f32 = 8.0;

    /// Horizontal pitch of the strip: one thumbnail plus its gap. All
    /// scroll-geometry math treats this as the fixed per-thumbnail width.
    pub const THUMBNAIL_SIZE_TOTAL: f32 = THUMBNAIL_SIZE + THUMBNAIL_SPACING;

    /// Height reserved for the strip's scrollable area.
    pub const STRIP_HEIGHT: f32 = 104.0;

    pub const SPINNER_SIZE: f32 = 48.0;
}

pub mod typography {
    /// Caption title line.
    pub const TITLE_MD: f32 = 20.0;

    /// Navigation arrow glyphs.
    pub const TITLE_LG: f32 = 30.0;

    /// Photographer credit and secondary labels.
    pub const BODY: f32 = 14.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::MD > spacing::SM);
    assert!(sizing::THUMBNAIL_SIZE_TOTAL == sizing::THUMBNAIL_SIZE + sizing::THUMBNAIL_SPACING);
    assert!(sizing::STRIP_HEIGHT > sizing::THUMBNAIL_SIZE);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(border::WIDTH_MD > border::WIDTH_SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thumbnail_pitch_covers_size_and_gap() {
        assert_eq!(
            sizing::THUMBNAIL_SIZE_TOTAL,
            sizing::THUMBNAIL_SIZE + sizing::THUMBNAIL_SPACING
        );
    }

    #[test]
    fn accent_color_channels_are_in_range() {
        let accent = palette::ACCENT_500;
        assert!(accent.r >= 0.0 && accent.r <= 1.0);
        assert!(accent.g >= 0.0 && accent.g <= 1.0);
        assert!(accent.b >= 0.0 && accent.b <= 1.0);
    }
}
