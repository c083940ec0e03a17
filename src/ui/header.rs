use iced::alignment::{Horizontal, Vertical};
use iced::font::{self, Font};
use iced::widget::{container, text};
use iced::{Element, Length, Padding};

use super::style;

pub const HEADER_HEIGHT: f32 = 120.0;

/// Gradient banner with a static title
pub fn banner<'a, Message: 'a>(title: &'a str) -> Element<'a, Message> {
    let title = text(title).size(28).font(Font {
        weight: font::Weight::Bold,
        ..Font::DEFAULT
    });

    container(title)
        .width(Length::Fill)
        .height(HEADER_HEIGHT)
        .padding(Padding {
            top: 40.0,
            ..Padding::ZERO
        })
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(style::header)
        .into()
}
