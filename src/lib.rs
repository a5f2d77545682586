//! Client for the PhonoVerse Translation API.
//!
//! ```no_run
//! # async fn run() -> phonoverse::Result<()> {
//! let client = phonoverse::TranslationClient::new(None)?;
//! let result = client.translate("Hello", "en", "fr", "casual").await?;
//! println!("{}", result.translated_text);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod http_service;
pub mod translate;

pub use config::{ClientConfig, HeaderConfig};
pub use error::{ApiError, PhonoVerseError, Result, ValidationError};
pub use http_service::HttpTransport;
pub use translate::catalog::{DEFAULT_MOOD, SUPPORTED_LANGUAGES, SUPPORTED_MOODS};
pub use translate::{TranslateTransport, TranslationClient, TranslationRequest, TranslationResult};
