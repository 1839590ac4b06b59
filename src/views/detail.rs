//! Detail view control flow

use crate::backend::Book;
use crate::router::Handoff;

/// Steps of the star row, one glyph each
pub const RATING_SCALE: [u8; 5] = [1, 2, 3, 4, 5];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Star {
    Full,
    Half,
    Empty,
}

impl Star {
    pub fn glyph(&self) -> &'static str {
        match self {
            Star::Full => "★",
            Star::Half => "✬",
            Star::Empty => "☆",
        }
    }
}

/// Star states for a rating against [`RATING_SCALE`]
pub fn stars(rating: f64) -> [Star; 5] {
    RATING_SCALE.map(|step| {
        let step = f64::from(step);
        if !rating.is_finite() {
            Star::Empty
        } else if step <= rating {
            Star::Full
        } else if step - 0.5 <= rating {
            Star::Half
        } else {
            Star::Empty
        }
    })
}

#[derive(Debug, Clone, Default)]
pub struct DetailView {
    /// `:id` segment from the routed path; informational only
    id: String,
    book: Option<Book>,
}

impl DetailView {
    /// Activate for `/book/:id` with whatever handoff the navigation carried
    ///
    /// The id is never used to look the book up again.
    pub fn activate(id: impl Into<String>, handoff: Option<Handoff>) -> Self {
        let id = id.into();
        let book = handoff.map(|h| {
            if h.index.to_string() != id {
                tracing::warn!("Handoff index {} does not match route id {}", h.index, id);
            }
            h.book
        });
        if book.is_none() {
            tracing::info!("Detail view for /book/{} opened without a record", id);
        }
        Self { id, book }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn book(&self) -> Option<&Book> {
        self.book.as_ref()
    }

    pub fn stars(&self) -> Option<[Star; 5]> {
        self.book.as_ref().map(|b| stars(b.rating))
    }
}
