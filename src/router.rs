//! Routes and navigation history
//!
//! Paths mirror what a web build would expose: `/`, `/team` and `/book/:id`.
//! Anything else redirects to the search view.

use crate::backend::Book;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Search,
    Team,
    /// Detail page; the `:id` segment is carried verbatim and never resolved
    Book(String),
}

impl Route {
    /// Parse a routed path, redirecting unknown paths to the root
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim().trim_matches('/');
        let segments: Vec<&str> = trimmed.split('/').collect();

        match segments.as_slice() {
            [""] => Route::Search,
            ["team"] => Route::Team,
            ["book", id] if !id.is_empty() => Route::Book(id.to_string()),
            _ => {
                tracing::debug!("No route for {:?}, redirecting to /", path);
                Route::Search
            }
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Search => "/".to_string(),
            Route::Team => "/team".to_string(),
            Route::Book(id) => format!("/book/{}", id),
        }
    }
}

/// Record handed from the search view to the detail view
///
/// Passed as an argument at navigation time, never stored in history.
#[derive(Debug, Clone, PartialEq)]
pub struct Handoff {
    pub index: usize,
    pub book: Book,
}

/// Linear navigation history
#[derive(Debug, Clone)]
pub struct Navigator {
    history: Vec<Route>,
}

impl Navigator {
    pub fn new(initial: Route) -> Self {
        Self {
            history: vec![initial],
        }
    }

    pub fn current(&self) -> Route {
        self.history.last().cloned().unwrap_or_default()
    }

    /// Push `route`; navigating to the current route is a no-op returning false
    pub fn navigate(&mut self, route: Route) -> bool {
        let current = self.current();
        if route == current {
            tracing::debug!("Already at {}", route.path());
            return false;
        }
        tracing::info!("Navigate {} -> {}", current.path(), route.path());
        self.history.push(route);
        true
    }

    /// Return to the previous route; `None` when already at the first entry
    pub fn back(&mut self) -> Option<Route> {
        if self.history.len() <= 1 {
            return None;
        }
        self.history.pop();
        let route = self.current();
        tracing::info!("Back to {}", route.path());
        Some(route)
    }

    #[cfg(test)]
    pub fn depth(&self) -> usize {
        self.history.len()
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Route::Search)
    }
}
