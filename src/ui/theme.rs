//! Theme configuration

use iced::{Background, Border, Color};
use iced::widget::{button, container};

/// Dark palette shared by all views
pub struct Palette;

impl Palette {
    pub const BACKGROUND: Color = Color::from_rgb(0.09, 0.09, 0.11);
    pub const SURFACE: Color = Color::from_rgb(0.12, 0.12, 0.14);
    pub const SURFACE_HIGHLIGHT: Color = Color::from_rgb(0.18, 0.18, 0.22);
    pub const BORDER: Color = Color::from_rgb(0.25, 0.25, 0.28);
    pub const PRIMARY: Color = Color::from_rgb(0.4, 0.55, 1.0);
    pub const STAR: Color = Color::from_rgb(1.0, 0.78, 0.3);
    pub const TEXT: Color = Color::from_rgb(0.95, 0.95, 0.95);
    pub const TEXT_MUTED: Color = Color::from_rgb(0.55, 0.55, 0.6);
    pub const TEXT_PLACEHOLDER: Color = Color::from_rgb(0.4, 0.4, 0.45);
}

/// Rounded surface used for cards and panels
pub fn surface(_theme: &iced::Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Palette::SURFACE)),
        border: Border {
            color: Palette::BORDER,
            width: 1.0,
            radius: 12.0.into(),
        },
        ..Default::default()
    }
}

/// Outer window frame
pub fn frame(_theme: &iced::Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Palette::BACKGROUND)),
        border: Border {
            color: Palette::BORDER,
            width: 1.0,
            radius: 16.0.into(),
        },
        ..Default::default()
    }
}

/// Flat button that highlights on hover
pub fn flat_button(_theme: &iced::Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Palette::SURFACE_HIGHLIGHT,
        _ => Color::TRANSPARENT,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: Palette::TEXT,
        border: Border::default().rounded(8),
        ..Default::default()
    }
}
