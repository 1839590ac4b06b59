use thiserror::Error;

/// Failure of a recommendation request
///
/// Payloads are rendered strings so the error can ride inside UI messages,
/// which must be `Clone`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecommendationError {
    /// Network failure, or the endpoint answered with a non-success status
    #[error("transport error: {reason}")]
    Transport { reason: String },

    /// The endpoint answered, but not with `{ "books": [...] }`
    #[error("malformed response: {reason}")]
    Malformed { reason: String },
}

impl RecommendationError {
    pub fn transport(reason: impl Into<String>) -> Self {
        Self::Transport {
            reason: reason.into(),
        }
    }

    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::Malformed {
            reason: reason.into(),
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }
}

impl From<reqwest::Error> for RecommendationError {
    fn from(err: reqwest::Error) -> Self {
        Self::transport(err.to_string())
    }
}

impl From<serde_json::Error> for RecommendationError {
    fn from(err: serde_json::Error) -> Self {
        Self::malformed(err.to_string())
    }
}
