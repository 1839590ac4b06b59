//! Prompt bar widget

use iced::widget::{container, text_input};
use iced::{Background, Border, Color, Element, Length, Padding};

use super::theme::{self, Palette};

/// Prompt bar; input is disabled while a request is in flight
pub fn view<'a, Message: Clone + 'a>(
    value: &str,
    loading: bool,
    on_input: impl Fn(String) -> Message + 'a,
    on_submit: Message,
) -> Element<'a, Message> {
    let mut input = text_input("What do you feel like reading?", value)
        .padding(Padding::new(16.0))
        .size(20)
        .style(|_theme, _status| text_input::Style {
            background: Background::Color(Color::TRANSPARENT),
            border: Border::default(),
            icon: Palette::TEXT_MUTED,
            placeholder: Palette::TEXT_PLACEHOLDER,
            value: Palette::TEXT,
            selection: Palette::PRIMARY,
        });

    if !loading {
        input = input.on_input(on_input).on_submit(on_submit);
    }

    container(input)
        .padding(Padding::from([8.0, 16.0]))
        .width(Length::Fill)
        .style(theme::surface)
        .into()
}
