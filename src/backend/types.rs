//! Shared types for recommendation endpoint communication

use serde::{Deserialize, Serialize};

/// A single recommended book
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub year: i32,
    pub description: String,
    /// Expected 0-5, not validated
    pub rating: f64,
}

/// Request body for `POST /api/generate`
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest<'a> {
    pub prompt: &'a str,
}

/// Response body for `POST /api/generate`, books in relevance order
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    pub books: Vec<Book>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(GenerateRequest { prompt: "fantasy novels" }).unwrap();
        assert_eq!(body, serde_json::json!({ "prompt": "fantasy novels" }));
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let raw = r#"{"books":[{"title":"Dune","author":"Frank Herbert","genre":"Sci-Fi","year":1965,"rating":4.8}]}"#;
        assert!(serde_json::from_str::<GenerateResponse>(raw).is_err());
    }

    #[test]
    fn test_integer_rating_accepted() {
        let raw = r#"{"books":[{"title":"Emma","author":"Jane Austen","genre":"Classic","year":1815,"description":"","rating":4}]}"#;
        let response: GenerateResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.books[0].rating, 4.0);
    }
}
