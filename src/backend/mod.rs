//! Recommendation service access

pub mod api;
pub mod error;
pub mod types;

pub use api::RecommendationClient;
pub use error::RecommendationError;
pub use types::Book;
