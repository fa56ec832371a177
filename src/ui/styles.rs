// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the gallery widgets.

use crate::ui::design_tokens::{border, opacity, palette, radius};
use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

/// Style for overlay buttons (navigation arrows, dismiss).
///
/// Transparent at rest, darkening on hover so the control reads against
/// any hero image.
pub fn button_overlay() -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => opacity::OVERLAY_MEDIUM,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            _ => opacity::OVERLAY_SUBTLE,
        };

        button::Style {
            background: Some(Background::Color(Color {
                a: alpha,
                ..palette::BLACK
            })),
            text_color: palette::WHITE,
            border: Border {
                radius: radius::MD.into(),
                ..Border::default()
            },
            ..button::Style::default()
        }
    }
}

/// Style for a strip thumbnail button. The selected thumbnail carries an
/// accent border; the rest a hairline gray one.
pub fn button_thumbnail(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let (border_color, border_width) = if selected {
            (palette::ACCENT_500, border::WIDTH_MD)
        } else if matches!(status, button::Status::Hovered) {
            (palette::GRAY_200, border::WIDTH_SM)
        } else {
            (palette::GRAY_700, border::WIDTH_SM)
        };

        button::Style {
            background: Some(Background::Color(palette::GRAY_900)),
            text_color: palette::WHITE,
            border: Border {
                color: border_color,
                width: border_width,
                radius: radius::SM.into(),
            },
            ..button::Style::default()
        }
    }
}

/// Dark gallery surface behind the hero image and strip.
pub fn surface(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_900)),
        ..container::Style::default()
    }
}

/// Placeholder box shown while a thumbnail is still decoding.
pub fn thumbnail_placeholder(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_700)),
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}
