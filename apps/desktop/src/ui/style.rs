//! Colors and widget styles.
//!
//! Every style takes an `opacity` so panels can fade during tab transitions.

use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color {
        r: r as f32 / 255.0,
        g: g as f32 / 255.0,
        b: b as f32 / 255.0,
        a: 1.0,
    }
}

pub const WHITE: Color = Color::WHITE;
pub const GRAY_50: Color = rgb(249, 250, 251);
pub const GRAY_200: Color = rgb(229, 231, 235);
pub const GRAY_300: Color = rgb(209, 213, 219);
pub const GRAY_400: Color = rgb(156, 163, 175);
pub const GRAY_500: Color = rgb(107, 114, 128);
pub const GRAY_600: Color = rgb(75, 85, 99);
pub const GRAY_700: Color = rgb(55, 65, 81);
pub const GRAY_800: Color = rgb(31, 41, 55);
pub const RED_50: Color = rgb(254, 242, 242);
pub const RED_200: Color = rgb(254, 202, 202);
pub const RED_700: Color = rgb(185, 28, 28);

const RADIUS: f32 = 8.0;
const RADIUS_SM: f32 = 6.0;

/// Scales a color's alpha by `opacity`.
pub fn fade(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity.clamp(0.0, 1.0),
        ..color
    }
}

pub fn page(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(WHITE)),
        ..Default::default()
    }
}

pub fn card(opacity: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(fade(WHITE, opacity))),
        border: Border {
            color: fade(GRAY_200, opacity),
            width: 1.0,
            radius: RADIUS.into(),
        },
        shadow: Shadow {
            color: fade(Color::from_rgba(0.0, 0.0, 0.0, 0.05), opacity),
            offset: Vector::new(0.0, 1.0),
            blur_radius: 2.0,
        },
        ..Default::default()
    }
}

pub fn dropzone(opacity: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        border: Border {
            color: fade(GRAY_300, opacity),
            width: 2.0,
            radius: RADIUS.into(),
        },
        ..Default::default()
    }
}

pub fn banner(success: bool, opacity: f32) -> impl Fn(&Theme) -> container::Style {
    let (background, border, text) = if success {
        (GRAY_50, GRAY_200, GRAY_800)
    } else {
        (RED_50, RED_200, RED_700)
    };

    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(fade(background, opacity))),
        text_color: Some(fade(text, opacity)),
        border: Border {
            color: fade(border, opacity),
            width: 1.0,
            radius: RADIUS.into(),
        },
        ..Default::default()
    }
}

pub fn primary_button(opacity: f32) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => GRAY_700,
            button::Status::Disabled => GRAY_400,
            _ => GRAY_800,
        };

        button::Style {
            background: Some(Background::Color(fade(background, opacity))),
            text_color: fade(WHITE, opacity),
            border: Border {
                radius: RADIUS_SM.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

pub fn outline_button(opacity: f32) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => fade(GRAY_50, opacity),
            _ => fade(WHITE, opacity),
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: fade(GRAY_700, opacity),
            border: Border {
                color: fade(GRAY_300, opacity),
                width: 1.0,
                radius: RADIUS_SM.into(),
            },
            ..Default::default()
        }
    }
}

/// Ghost button with an underline-like border on the active tab.
pub fn tab_button(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let text_color = match (active, status) {
            (true, _) => GRAY_800,
            (false, button::Status::Hovered) => GRAY_600,
            (false, _) => GRAY_400,
        };

        button::Style {
            background: None,
            text_color,
            border: Border {
                color: if active { GRAY_800 } else { Color::TRANSPARENT },
                width: if active { 2.0 } else { 0.0 },
                radius: 0.0_f32.into(),
            },
            ..Default::default()
        }
    }
}
