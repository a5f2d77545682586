use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::catalog::DEFAULT_MOOD;
use crate::error::ApiError;

/// Translation request built by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub text: String,
    pub source_language: String,
    pub target_language: String,
    #[serde(default = "default_mood")]
    pub mood: String,
}

fn default_mood() -> String {
    DEFAULT_MOOD.to_string()
}

impl TranslationRequest {
    pub fn new(text: &str, source_language: &str, target_language: &str) -> Self {
        Self {
            text: text.to_string(),
            source_language: source_language.to_string(),
            target_language: target_language.to_string(),
            mood: default_mood(),
        }
    }

    pub fn with_mood(mut self, mood: &str) -> Self {
        self.mood = mood.to_string();
        self
    }
}

/// JSON body posted to the translate action
#[derive(Debug, Clone, Serialize)]
pub struct TranslatePayload<'a> {
    pub text: &'a str,
    pub from: &'a str,
    pub to: &'a str,
    pub mood: &'a str,
}

/// Completed translation. `created_at` is set when the record is built,
/// after the response arrives.
/// `mood` keeps the caller's casing, the same string that went on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub original_text: String,
    pub translated_text: String,
    pub source_language: String,
    pub target_language: String,
    pub mood: String,
    pub created_at: DateTime<Utc>,
}

impl TranslationResult {
    pub fn new(
        original_text: &str,
        translated_text: String,
        source_language: &str,
        target_language: &str,
        mood: &str,
    ) -> Self {
        Self {
            original_text: original_text.to_string(),
            translated_text,
            source_language: source_language.to_string(),
            target_language: target_language.to_string(),
            mood: mood.to_string(),
            created_at: Utc::now(),
        }
    }
}

/// Sends a JSON body to the backend and returns the decoded JSON reply
#[async_trait]
pub trait TranslateTransport: Send + Sync {
    /// POST `payload` to `url`.
    ///
    /// Connection failures, non-2xx statuses and undecodable bodies are all
    /// reported as [`ApiError::Request`].
    async fn post_json(
        &self,
        url: &str,
        payload: &TranslatePayload<'_>,
    ) -> Result<serde_json::Value, ApiError>;
}
