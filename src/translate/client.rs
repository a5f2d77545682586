use std::collections::BTreeSet;
use std::sync::Arc;
use serde_json::Value;
use tracing::{debug, warn};

use super::catalog;
use super::interface::{TranslatePayload, TranslateTransport, TranslationRequest, TranslationResult};
use crate::config::{ClientConfig, DEFAULT_BASE_URL};
use crate::error::{ApiError, Result};
use crate::http_service::HttpTransport;

const TRANSLATE_PATH: &str = "/app/api.php?action=translate";

/// Client for the PhonoVerse translate endpoint.
///
/// Holds only static configuration plus the transport. One call to
/// [`TranslationClient::translate`] performs exactly one POST, with no retries
/// and no caching.
#[derive(Clone)]
pub struct TranslationClient {
    base_url: String,
    transport: Arc<dyn TranslateTransport>,
}

impl TranslationClient {
    /// Create a client with the default headers.
    ///
    /// `base_url` defaults to the production origin; trailing slashes are stripped.
    pub fn new(base_url: Option<&str>) -> Result<Self> {
        let config = ClientConfig::with_base_url(base_url.unwrap_or(DEFAULT_BASE_URL));
        Self::from_config(&config)
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config.headers)?;
        Ok(Self::with_transport(&config.base_url, Arc::new(transport)))
    }

    /// Create a client over a custom transport
    pub fn with_transport(base_url: &str, transport: Arc<dyn TranslateTransport>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, TRANSLATE_PATH)
    }

    /// Translate `text` from `from_lang` to `to_lang` in the given mood.
    ///
    /// Languages and mood are checked before any I/O. The mood is validated
    /// lowercased but sent with the caller's casing.
    pub async fn translate(
        &self,
        text: &str,
        from_lang: &str,
        to_lang: &str,
        mood: &str,
    ) -> Result<TranslationResult> {
        catalog::validate(from_lang, to_lang, mood)?;

        let url = self.endpoint();
        let payload = TranslatePayload {
            text,
            from: from_lang,
            to: to_lang,
            mood,
        };

        debug!("Sending translate request: url={}, from={}, to={}, mood={}",
               url, from_lang, to_lang, mood);

        let response = self.transport.post_json(&url, &payload).await.map_err(|e| {
            warn!("Translate request failed: {}", e);
            e
        })?;

        let translated_text = extract_translation(response)?;
        debug!("Translation received: {} chars", translated_text.chars().count());

        Ok(TranslationResult::new(
            text,
            translated_text,
            from_lang,
            to_lang,
            mood,
        ))
    }

    pub async fn translate_request(&self, request: &TranslationRequest) -> Result<TranslationResult> {
        self.translate(
            &request.text,
            &request.source_language,
            &request.target_language,
            &request.mood,
        )
        .await
    }

    pub fn get_supported_languages(&self) -> BTreeSet<String> {
        catalog::supported_languages()
    }

    pub fn get_supported_moods(&self) -> BTreeSet<String> {
        catalog::supported_moods()
    }
}

/// Pull the translated text out of a decoded reply. An `error` key wins
/// over everything else.
fn extract_translation(mut response: Value) -> std::result::Result<String, ApiError> {
    if let Some(error) = response.get("error") {
        let message = match error {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        warn!("Translation service returned error: {}", message);
        return Err(ApiError::Service(message));
    }

    match response.get_mut("translation").map(Value::take) {
        Some(Value::String(translation)) => Ok(translation),
        Some(other) => Err(ApiError::InvalidResponse(format!(
            "'translation' is not a string: {}",
            other
        ))),
        None => Err(ApiError::MissingTranslation),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{PhonoVerseError, ValidationError};
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    // Records every call and answers with a canned reply
    struct MockTransport {
        reply: std::result::Result<Value, ApiError>,
        calls: Mutex<Vec<(String, Value)>>,
    }

    impl MockTransport {
        fn replying(reply: std::result::Result<Value, ApiError>) -> Arc<Self> {
            Arc::new(Self {
                reply,
                calls: Mutex::new(Vec::new()),
            })
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }

        fn last_call(&self) -> (String, Value) {
            self.calls.lock().unwrap().last().cloned().unwrap()
        }
    }

    #[async_trait]
    impl TranslateTransport for MockTransport {
        async fn post_json(
            &self,
            url: &str,
            payload: &TranslatePayload<'_>,
        ) -> std::result::Result<Value, ApiError> {
            let body = serde_json::to_value(payload).unwrap();
            self.calls.lock().unwrap().push((url.to_string(), body));
            self.reply.clone()
        }
    }

    fn client_with(transport: &Arc<MockTransport>) -> TranslationClient {
        TranslationClient::with_transport("https://example.com", transport.clone())
    }

    #[tokio::test]
    async fn test_translate_success() {
        let transport = MockTransport::replying(Ok(json!({"translation": "Bonjour"})));
        let client = client_with(&transport);

        let result = client.translate("Hello", "en", "fr", "casual").await.unwrap();
        assert_eq!(result.original_text, "Hello");
        assert_eq!(result.translated_text, "Bonjour");
        assert_eq!(result.source_language, "en");
        assert_eq!(result.target_language, "fr");
        assert_eq!(result.mood, "casual");
        assert_eq!(transport.call_count(), 1);
    }

    #[tokio::test]
    async fn test_unsupported_languages_never_reach_transport() {
        let transport = MockTransport::replying(Ok(json!({"translation": "x"})));
        let client = client_with(&transport);

        for (from, to) in [("xx", "fr"), ("en", "xx"), ("EN", "fr"), ("en", "Fr"), ("", "fr")] {
            let err = client.translate("Hello", from, to, "neutral").await.unwrap_err();
            assert!(err.is_validation(), "{} -> {} should fail validation", from, to);
        }
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_validation_error_names_offending_code() {
        let transport = MockTransport::replying(Ok(json!({"translation": "x"})));
        let client = client_with(&transport);

        let err = client.translate("Hello", "en", "klingon", "neutral").await.unwrap_err();
        match err {
            PhonoVerseError::Validation(ValidationError::UnsupportedTargetLanguage(code)) => {
                assert_eq!(code, "klingon")
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unsupported_mood_fails_validation() {
        let transport = MockTransport::replying(Ok(json!({"translation": "x"})));
        let client = client_with(&transport);

        for mood in ["angry", "", "neutral ", "sarcastic"] {
            let err = client.translate("Hello", "en", "fr", mood).await.unwrap_err();
            assert!(err.is_validation());
        }
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_mood_case_is_preserved_on_the_wire() {
        let transport = MockTransport::replying(Ok(json!({"translation": "Bonjour"})));
        let client = client_with(&transport);

        let result = client.translate("Hello", "en", "fr", "FORMAL").await.unwrap();
        let (_, body) = transport.last_call();
        assert_eq!(
            body,
            json!({"text": "Hello", "from": "en", "to": "fr", "mood": "FORMAL"})
        );
        assert_eq!(result.mood, "FORMAL");
    }

    #[tokio::test]
    async fn test_service_error_is_api_error() {
        let transport = MockTransport::replying(Ok(json!({"error": "rate limited"})));
        let client = client_with(&transport);

        let err = client.translate("Hello", "en", "fr", "neutral").await.unwrap_err();
        assert!(err.is_api());
        assert_eq!(err.to_string(), "rate limited");
    }

    #[tokio::test]
    async fn test_error_key_wins_over_translation() {
        let transport = MockTransport::replying(Ok(json!({"error": "quota", "translation": "Bonjour"})));
        let client = client_with(&transport);

        let err = client.translate("Hello", "en", "fr", "neutral").await.unwrap_err();
        assert_eq!(err.to_string(), "quota");
    }

    #[tokio::test]
    async fn test_transport_failure_is_api_error() {
        let transport = MockTransport::replying(Err(ApiError::Request(
            "error trying to connect: Connection refused".to_string(),
        )));
        let client = client_with(&transport);

        let err = client.translate("Hello", "en", "fr", "neutral").await.unwrap_err();
        assert!(err.is_api());
        assert!(err.to_string().contains("Connection refused"));
    }

    #[tokio::test]
    async fn test_missing_translation_field() {
        let transport = MockTransport::replying(Ok(json!({"status": "ok"})));
        let client = client_with(&transport);

        let err = client.translate("Hello", "en", "fr", "neutral").await.unwrap_err();
        assert!(matches!(err, PhonoVerseError::Api(ApiError::MissingTranslation)));
    }

    #[tokio::test]
    async fn test_non_string_translation_is_invalid() {
        let transport = MockTransport::replying(Ok(json!({"translation": 42})));
        let client = client_with(&transport);

        let err = client.translate("Hello", "en", "fr", "neutral").await.unwrap_err();
        assert!(matches!(err, PhonoVerseError::Api(ApiError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn test_trailing_slash_is_normalized() {
        let with_slash = MockTransport::replying(Ok(json!({"translation": "x"})));
        let without_slash = MockTransport::replying(Ok(json!({"translation": "x"})));
        let a = TranslationClient::with_transport("https://example.com/", with_slash.clone());
        let b = TranslationClient::with_transport("https://example.com", without_slash.clone());

        a.translate("Hi", "en", "de", "neutral").await.unwrap();
        b.translate("Hi", "en", "de", "neutral").await.unwrap();

        assert_eq!(with_slash.last_call().0, without_slash.last_call().0);
        assert_eq!(
            with_slash.last_call().0,
            "https://example.com/app/api.php?action=translate"
        );
    }

    #[tokio::test]
    async fn test_translate_request_uses_default_mood() {
        let transport = MockTransport::replying(Ok(json!({"translation": "Hallo"})));
        let client = client_with(&transport);

        let request = TranslationRequest::new("Hello", "en", "de");
        let result = client.translate_request(&request).await.unwrap();
        assert_eq!(result.mood, "neutral");
        assert_eq!(transport.last_call().1["mood"], "neutral");
    }

    #[tokio::test]
    async fn test_created_at_is_set_after_response() {
        let transport = MockTransport::replying(Ok(json!({"translation": "Hola"})));
        let client = client_with(&transport);

        let before = chrono::Utc::now();
        let result = client.translate("Hello", "en", "es", "friendly").await.unwrap();
        assert!(result.created_at >= before);
        assert!(result.created_at <= chrono::Utc::now());
    }

    #[test]
    fn test_supported_sets_are_copies() {
        let transport = MockTransport::replying(Ok(json!({})));
        let client = client_with(&transport);

        let mut langs = client.get_supported_languages();
        langs.insert("xx".to_string());
        langs.remove("en");
        let mut moods = client.get_supported_moods();
        moods.insert("angry".to_string());

        assert!(client.get_supported_languages().contains("en"));
        assert!(!client.get_supported_languages().contains("xx"));
        assert!(!client.get_supported_moods().contains("angry"));
    }

    #[tokio::test]
    async fn test_mutating_copies_does_not_change_validation() {
        let transport = MockTransport::replying(Ok(json!({"translation": "x"})));
        let client = client_with(&transport);

        let mut langs = client.get_supported_languages();
        langs.insert("xx".to_string());

        let err = client.translate("Hello", "xx", "fr", "neutral").await.unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_default_base_url() {
        let client = TranslationClient::new(None).unwrap();
        assert_eq!(client.base_url(), "https://phonoverse.x10.bz");
        assert_eq!(
            client.endpoint(),
            "https://phonoverse.x10.bz/app/api.php?action=translate"
        );
    }
}
