use std::collections::BTreeSet;

use crate::error::ValidationError;

/// Language codes accepted by the backend. Matched exactly, case-sensitive.
pub const SUPPORTED_LANGUAGES: &[&str] = &[
    "en", "es", "fr", "de", "it", "pt", "nl", "ru", "zh", "ja", "ko",
    "ar", "hi", "tr", "pl", "vi", "th", "id", "ms",
];

/// Style tags accepted by the backend. Input is lowercased before matching.
pub const SUPPORTED_MOODS: &[&str] = &[
    "neutral", "formal", "casual", "friendly", "professional",
    "humorous", "serious", "poetic",
];

pub const DEFAULT_MOOD: &str = "neutral";

pub fn is_supported_language(code: &str) -> bool {
    SUPPORTED_LANGUAGES.contains(&code)
}

pub fn is_supported_mood(mood: &str) -> bool {
    SUPPORTED_MOODS.contains(&mood.to_lowercase().as_str())
}

/// Check a language pair and mood, reporting the first failure in
/// source, target, mood order.
pub fn validate(from_lang: &str, to_lang: &str, mood: &str) -> Result<(), ValidationError> {
    if !is_supported_language(from_lang) {
        return Err(ValidationError::UnsupportedSourceLanguage(from_lang.to_string()));
    }
    if !is_supported_language(to_lang) {
        return Err(ValidationError::UnsupportedTargetLanguage(to_lang.to_string()));
    }
    if !is_supported_mood(mood) {
        return Err(ValidationError::UnsupportedMood(mood.to_string()));
    }
    Ok(())
}

/// Owned copy of the language set
pub fn supported_languages() -> BTreeSet<String> {
    SUPPORTED_LANGUAGES.iter().map(|s| s.to_string()).collect()
}

/// Owned copy of the mood set
pub fn supported_moods() -> BTreeSet<String> {
    SUPPORTED_MOODS.iter().map(|s| s.to_string()).collect()
}
