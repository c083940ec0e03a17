//! Search bar and the active filter chips below it
use iced::widget::{button, column, container, row, text, text_input};
use iced::{Alignment, Element, Length, Pixels};
use iced_aw::Wrap;

use super::style;

pub const PLACEHOLDER: &str = "Search photos...";

/// Search field plus chips, on a white card.
///
/// Typing reports every change through `on_input`; pressing Enter emits
/// `on_submit`. Each chip's close button emits `on_remove(position)`.
pub fn search_panel<'a, Message: Clone + 'a>(
    query: &'a str,
    filters: &'a [String],
    on_input: impl Fn(String) -> Message + 'a,
    on_submit: Message,
    on_remove: impl Fn(usize) -> Message,
) -> Element<'a, Message> {
    let field = text_input(PLACEHOLDER, query)
        .on_input(on_input)
        .on_submit(on_submit)
        .padding(12)
        .size(16)
        .style(style::search_field);

    container(column![field, filter_chips(filters, on_remove)].spacing(10))
        .width(Length::Fill)
        .padding(15)
        .style(style::search_panel)
        .into()
}

/// Closable chips in insertion order, wrapping onto new lines
fn filter_chips<'a, Message: Clone + 'a>(
    filters: &'a [String],
    on_remove: impl Fn(usize) -> Message,
) -> Element<'a, Message> {
    let chips = filters
        .iter()
        .enumerate()
        .map(|(index, term)| chip(term, on_remove(index)))
        .collect();

    Wrap::with_elements(chips)
        .spacing(Pixels(4.0))
        .line_spacing(Pixels(4.0))
        .into()
}

fn chip<'a, Message: Clone + 'a>(term: &'a str, on_close: Message) -> Element<'a, Message> {
    let close = button(text("✕").size(12))
        .on_press(on_close)
        .padding(2)
        .style(style::chip_close);

    container(
        row![text(term).size(14), close]
            .spacing(6)
            .align_y(Alignment::Center),
    )
    .padding([4, 10])
    .style(style::chip)
    .into()
}
