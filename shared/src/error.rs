use thiserror::Error;

/// Failure of a single weather API request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Backend unreachable or the request could not be sent.
    #[error("fetch error: {0}")]
    Network(String),

    /// Backend answered with a non-2xx status.
    #[error("HTTP {0}")]
    Status(u16),

    /// Response body was not the expected JSON shape.
    #[error("parse error: {0}")]
    Decode(String),
}

impl FetchError {
    /// Transport-level failures (unreachable or non-2xx), as opposed to bad payloads.
    pub fn is_network(&self) -> bool {
        matches!(self, FetchError::Network(_) | FetchError::Status(_))
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}
