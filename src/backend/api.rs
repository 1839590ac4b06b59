//! HTTP client for the recommendation endpoint

use reqwest::Client;

use super::error::RecommendationError;
use super::types::{Book, GenerateRequest, GenerateResponse};

/// Path of the generation endpoint, relative to the configured origin
pub const GENERATE_PATH: &str = "/api/generate";

/// Client for the remote book recommendation service
///
/// One call per invocation: no retries, no timeout, no caching.
#[derive(Debug, Clone)]
pub struct RecommendationClient {
    client: Client,
    base_url: String,
}

impl RecommendationClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, GENERATE_PATH)
    }

    /// Ask the service for books matching a free-text prompt
    ///
    /// The returned list keeps the service's relevance order.
    pub async fn fetch_recommendations(&self, prompt: &str) -> Result<Vec<Book>, RecommendationError> {
        let url = self.endpoint();
        tracing::debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(&GenerateRequest { prompt })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RecommendationError::transport(format!(
                "{} returned {}",
                url, status
            )));
        }

        let body = response.bytes().await?;
        let parsed: GenerateResponse = serde_json::from_slice(&body)?;

        tracing::debug!("received {} recommendations", parsed.books.len());
        Ok(parsed.books)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    async fn spawn_server(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind");
        let addr = listener.local_addr().expect("addr");
        tokio::spawn(async move { axum::serve(listener, router).await.expect("serve") });
        format!("http://{}", addr)
    }

    fn dune() -> Value {
        json!({
            "title": "Dune",
            "author": "Frank Herbert",
            "genre": "Sci-Fi",
            "year": 1965,
            "description": "...",
            "rating": 4.8
        })
    }

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let client = RecommendationClient::new("http://localhost:8000/");
        assert_eq!(client.endpoint(), "http://localhost:8000/api/generate");
    }

    #[tokio::test]
    async fn test_fetch_sends_prompt_and_parses_books() {
        let seen: Arc<Mutex<Option<Value>>> = Arc::new(Mutex::new(None));
        let recorder = seen.clone();
        let router = Router::new().route(
            "/api/generate",
            post(move |Json(body): Json<Value>| {
                let recorder = recorder.clone();
                async move {
                    *recorder.lock().unwrap() = Some(body);
                    Json(json!({ "books": [dune()] }))
                }
            }),
        );
        let base = spawn_server(router).await;

        let books = RecommendationClient::new(&base)
            .fetch_recommendations("fantasy novels")
            .await
            .expect("books");

        assert_eq!(
            seen.lock().unwrap().clone(),
            Some(json!({ "prompt": "fantasy novels" }))
        );
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].title, "Dune");
        assert_eq!(books[0].author, "Frank Herbert");
        assert_eq!(books[0].year, 1965);
        assert_eq!(books[0].rating, 4.8);
    }

    #[tokio::test]
    async fn test_fetch_keeps_relevance_order() {
        let router = Router::new().route(
            "/api/generate",
            post(|| async {
                let mut second = dune();
                second["title"] = json!("Children of Dune");
                let mut third = dune();
                third["title"] = json!("Dune Messiah");
                Json(json!({ "books": [dune(), second, third] }))
            }),
        );
        let base = spawn_server(router).await;

        let titles: Vec<String> = RecommendationClient::new(&base)
            .fetch_recommendations("sand")
            .await
            .unwrap()
            .into_iter()
            .map(|b| b.title)
            .collect();
        assert_eq!(titles, vec!["Dune", "Children of Dune", "Dune Messiah"]);
    }

    #[tokio::test]
    async fn test_error_status_is_transport_error() {
        let router = Router::new().route(
            "/api/generate",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let base = spawn_server(router).await;

        let err = RecommendationClient::new(&base)
            .fetch_recommendations("anything")
            .await
            .unwrap_err();
        assert!(err.is_transport());
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_error() {
        // Bind then drop to get a port nothing listens on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = RecommendationClient::new(&format!("http://{}", addr))
            .fetch_recommendations("anything")
            .await
            .unwrap_err();
        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn test_wrong_shape_is_malformed_error() {
        let router = Router::new().route(
            "/api/generate",
            post(|| async { Json(json!({ "results": [] })) }),
        );
        let base = spawn_server(router).await;

        let err = RecommendationClient::new(&base)
            .fetch_recommendations("anything")
            .await
            .unwrap_err();
        assert!(matches!(err, RecommendationError::Malformed { .. }));
    }

    #[tokio::test]
    async fn test_non_json_body_is_malformed_error() {
        let router = Router::new().route("/api/generate", post(|| async { "not json" }));
        let base = spawn_server(router).await;

        let err = RecommendationClient::new(&base)
            .fetch_recommendations("anything")
            .await
            .unwrap_err();
        assert!(matches!(err, RecommendationError::Malformed { .. }));
    }
}
