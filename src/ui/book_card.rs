//! Book card and star row widgets

use iced::widget::{button, column, row, text, Space};
use iced::{Element, Length, Padding};

use crate::backend::Book;
use crate::views::detail::{stars, Star};

use super::theme::{self, Palette};

pub fn star_row<'a, Message: 'a>(rating: f64, states: [Star; 5], size: u16) -> Element<'a, Message> {
    let glyphs: [Element<'a, Message>; 5] = states.map(|star| {
        let color = if star == Star::Empty {
            Palette::TEXT_MUTED
        } else {
            Palette::STAR
        };
        text(star.glyph()).size(size).color(color).into()
    });

    row(glyphs)
        .push(text(format!("{:.1}", rating)).size(size).color(Palette::TEXT_MUTED))
        .spacing(2)
        .into()
}

/// One result in the list; pressing it emits `on_press`
pub fn view<'a, Message: Clone + 'a>(book: &'a Book, on_press: Message) -> Element<'a, Message> {
    let content = row![
        column![
            text(&book.title).size(16).color(Palette::TEXT),
            text(format!("{} · {}", book.author, book.year))
                .size(13)
                .color(Palette::TEXT_MUTED),
            text(&book.genre).size(12).color(Palette::PRIMARY),
        ]
        .spacing(2),
        Space::with_width(Length::Fill),
        star_row(book.rating, stars(book.rating), 13),
    ]
    .spacing(12)
    .align_y(iced::Alignment::Center);

    button(content)
        .on_press(on_press)
        .padding(Padding::from([10.0, 12.0]))
        .width(Length::Fill)
        .style(theme::flat_button)
        .into()
}
