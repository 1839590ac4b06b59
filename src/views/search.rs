//! Search view control flow
//!
//! Holds the prompt, the displayed books and the request phase. The phase is
//! authoritative: a submit while a request is outstanding is rejected.

use uuid::Uuid;

use crate::backend::{Book, RecommendationError};
use crate::router::Handoff;

/// Identifies one submitted recommendation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(Uuid);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Searching { request: RequestId },
}

impl Phase {
    pub fn is_searching(&self) -> bool {
        matches!(self, Phase::Searching { .. })
    }
}

/// A request the caller must now send to the recommendation client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub request: RequestId,
    pub prompt: String,
}

#[derive(Debug, Clone, Default)]
pub struct SearchView {
    prompt: String,
    books: Vec<Book>,
    phase: Phase,
}

impl SearchView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The in-flight flag
    pub fn is_loading(&self) -> bool {
        self.phase.is_searching()
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    /// Move to `Searching` if the prompt has content and nothing is in flight
    ///
    /// The prompt is sent as typed; trimming only decides whether it is blank.
    pub fn submit(&mut self) -> Option<Submission> {
        if self.prompt.trim().is_empty() {
            return None;
        }

        if let Phase::Searching { request } = self.phase {
            tracing::info!("Ignoring submit while request {:?} is outstanding", request);
            return None;
        }

        let request = RequestId::new();
        self.phase = Phase::Searching { request };
        tracing::info!("Requesting recommendations for {:?}", self.prompt);

        Some(Submission {
            request,
            prompt: self.prompt.clone(),
        })
    }

    /// Settle the outstanding request
    ///
    /// On failure the error is logged and the previous list stays on screen.
    /// Completions for any other request are dropped.
    pub fn complete(&mut self, request: RequestId, result: Result<Vec<Book>, RecommendationError>) {
        match self.phase {
            Phase::Searching { request: current } if current == request => {}
            _ => {
                tracing::debug!("Dropping stale completion for {:?}", request);
                return;
            }
        }

        self.phase = Phase::Idle;
        match result {
            Ok(books) => {
                tracing::info!("Showing {} recommendations", books.len());
                self.books = books;
            }
            Err(e) => {
                tracing::error!("Error fetching book recommendations: {}", e);
            }
        }
    }

    /// Hand off the book at `index` for the detail view
    pub fn select(&self, index: usize) -> Option<Handoff> {
        self.books.get(index).map(|book| Handoff {
            index,
            book: book.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(title: &str) -> Book {
        Book {
            title: title.to_string(),
            author: "Frank Herbert".to_string(),
            genre: "Sci-Fi".to_string(),
            year: 1965,
            description: "...".to_string(),
            rating: 4.8,
        }
    }

    fn view_with(books: Vec<Book>) -> SearchView {
        let mut view = SearchView::new();
        view.set_prompt("seed");
        let submission = view.submit().unwrap();
        view.complete(submission.request, Ok(books));
        view
    }

    #[test]
    fn test_submit_sets_loading_and_success_clears_it() {
        let mut view = SearchView::new();
        view.set_prompt("fantasy novels");

        let submission = view.submit().expect("submission");
        assert_eq!(submission.prompt, "fantasy novels");
        assert!(view.is_loading());

        view.complete(submission.request, Ok(vec![book("Dune")]));
        assert!(!view.is_loading());
        assert_eq!(view.books(), &[book("Dune")]);
    }

    #[test]
    fn test_prompt_sent_untrimmed() {
        let mut view = SearchView::new();
        view.set_prompt("  cozy mysteries ");
        assert_eq!(view.submit().unwrap().prompt, "  cozy mysteries ");
    }

    #[test]
    fn test_blank_prompt_does_nothing() {
        for prompt in ["", "   ", "\t\n"] {
            let mut view = view_with(vec![book("Dune")]);
            view.set_prompt(prompt);
            assert_eq!(view.submit(), None);
            assert!(!view.is_loading());
            assert_eq!(view.books(), &[book("Dune")]);
        }
    }

    #[test]
    fn test_failure_keeps_previous_list() {
        let mut view = view_with(vec![book("Dune"), book("Emma")]);
        view.set_prompt("anything");
        let submission = view.submit().unwrap();

        view.complete(
            submission.request,
            Err(RecommendationError::transport("connection refused")),
        );
        assert!(!view.is_loading());
        assert_eq!(view.books(), &[book("Dune"), book("Emma")]);
    }

    #[test]
    fn test_success_replaces_list_in_order() {
        let mut view = view_with(vec![book("Old")]);
        view.set_prompt("new");
        let submission = view.submit().unwrap();
        let fresh = vec![book("C"), book("A"), book("B")];

        view.complete(submission.request, Ok(fresh.clone()));
        assert_eq!(view.books(), fresh.as_slice());
    }

    #[test]
    fn test_submit_rejected_while_searching() {
        let mut view = SearchView::new();
        view.set_prompt("first");
        let first = view.submit().unwrap();

        view.set_prompt("second");
        assert_eq!(view.submit(), None);
        assert_eq!(view.phase(), Phase::Searching { request: first.request });
    }

    #[test]
    fn test_stale_completion_is_dropped() {
        let mut view = SearchView::new();
        view.set_prompt("first");
        let first = view.submit().unwrap();

        view.complete(RequestId::new(), Ok(vec![book("Wrong")]));
        assert!(view.is_loading());
        assert!(view.books().is_empty());

        view.complete(first.request, Ok(vec![book("Right")]));
        // A second settle of the same request is stale too
        view.complete(first.request, Ok(vec![book("Again")]));
        assert_eq!(view.books(), &[book("Right")]);
    }

    #[test]
    fn test_select_in_range() {
        let view = view_with(vec![book("A"), book("B"), book("C")]);
        let handoff = view.select(1).unwrap();
        assert_eq!(handoff.index, 1);
        assert_eq!(handoff.book, book("B"));
        assert_eq!(view.select(3), None);
    }
}
