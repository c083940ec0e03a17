//! Colours and widget styles for the gallery
use iced::gradient::{self, Gradient};
use iced::widget::{button, container, text_input};
use iced::{Background, Border, Color, Radians, Shadow, Theme, Vector};

/// Deep blue, left edge of the header and text accents
pub const DEEP_BLUE: Color = Color::from_rgb(0x1e as f32 / 255.0, 0x3c as f32 / 255.0, 0x72 as f32 / 255.0);
/// Lighter blue, right edge of the header and chip outline
pub const LIGHT_BLUE: Color = Color::from_rgb(0x2a as f32 / 255.0, 0x52 as f32 / 255.0, 0x98 as f32 / 255.0);

const SCREEN: Color = Color::from_rgb(0xf5 as f32 / 255.0, 0xfc as f32 / 255.0, 0xff as f32 / 255.0);
const SEARCH_FIELD: Color = Color::from_rgb(0xf0 as f32 / 255.0, 0xf4 as f32 / 255.0, 0xff as f32 / 255.0);
const CHIP: Color = Color::from_rgb(0xe8 as f32 / 255.0, 0xf0 as f32 / 255.0, 0xfe as f32 / 255.0);

/// Plain white background of the layout shell
pub fn shell(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::WHITE)),
        ..container::Style::default()
    }
}

pub fn screen(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(SCREEN)),
        ..container::Style::default()
    }
}

/// Horizontal deep-to-light blue gradient
pub fn header(_theme: &Theme) -> container::Style {
    let gradient = gradient::Linear::new(Radians(std::f32::consts::FRAC_PI_2))
        .add_stop(0.0, DEEP_BLUE)
        .add_stop(1.0, LIGHT_BLUE);

    container::Style {
        background: Some(Background::Gradient(Gradient::Linear(gradient))),
        text_color: Some(Color::WHITE),
        ..container::Style::default()
    }
}

/// White card holding the search field and chips
pub fn search_panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::WHITE)),
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.1),
            offset: Vector::new(0.0, 2.0),
            blur_radius: 4.0,
        },
        ..container::Style::default()
    }
}

pub fn search_field(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let mut style = text_input::default(theme, status);
    style.background = Background::Color(SEARCH_FIELD);
    style.border = Border {
        radius: 10.0.into(),
        width: 0.0,
        color: Color::TRANSPARENT,
    };
    style.value = DEEP_BLUE;
    style.icon = LIGHT_BLUE;
    style
}

/// Outlined chip for an active filter
pub fn chip(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(CHIP)),
        text_color: Some(DEEP_BLUE),
        border: Border {
            color: LIGHT_BLUE,
            width: 1.0,
            radius: 8.0.into(),
        },
        ..container::Style::default()
    }
}

/// Borderless close button inside a chip
pub fn chip_close(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => LIGHT_BLUE,
        _ => DEEP_BLUE,
    };

    button::Style {
        background: None,
        text_color,
        ..button::Style::default()
    }
}
