use thiserror::Error;

/// Failures talking to the institution directory backend.
///
/// `Network`, `Status` and `JsonParse` are transport-level; `Remote` is a
/// well-formed response that carried an `error` field.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected HTTP status {status}")]
    Status { status: u16 },

    #[error("JSON parse error: {0}")]
    JsonParse(String),

    #[error("{0}")]
    Remote(String),

    #[error("Invalid API address: {0}")]
    InvalidBase(String),
}

impl ApiError {
    pub fn is_remote(&self) -> bool {
        matches!(self, ApiError::Remote(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}
