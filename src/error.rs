use thiserror::Error;

/// Base error for every failure the client reports
#[derive(Debug, Error)]
pub enum PhonoVerseError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Rejected before any network I/O
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Unsupported source language: {0}")]
    UnsupportedSourceLanguage(String),

    #[error("Unsupported target language: {0}")]
    UnsupportedTargetLanguage(String),

    #[error("Unsupported mood: {0}")]
    UnsupportedMood(String),
}

/// Transport failures and errors reported by the backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Connection, status or decoding failure of the round trip
    #[error("API request failed: {0}")]
    Request(String),

    /// The backend answered with an `error` field
    #[error("{0}")]
    Service(String),

    #[error("Response missing 'translation' field")]
    MissingTranslation,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Request(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PhonoVerseError>;

impl PhonoVerseError {
    pub fn is_validation(&self) -> bool {
        matches!(self, PhonoVerseError::Validation(_))
    }

    pub fn is_api(&self) -> bool {
        matches!(self, PhonoVerseError::Api(_))
    }
}
