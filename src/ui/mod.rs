//! Reusable widgets

pub mod book_card;
pub mod search_bar;
pub mod theme;
